//! Domain models for fee-ledger-service.

mod fee_record;
mod installment;
mod summary;

pub use fee_record::{CreateFeeRecord, FeeFilter, FeeRecord, FeeStatus, UpdateFeeRecord};
pub use installment::{Installment, InstallmentPlan};
pub use summary::{FeeSummary, SummaryFilter};
