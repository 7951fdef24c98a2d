//! Service layer: storage handle, document numbers, metrics.

pub mod database;
pub mod metrics;
pub mod numbers;

pub use database::Database;
pub use metrics::{get_metrics, init_metrics};
