//! Aggregate reporting types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ledger-wide totals for an optional trade / academic-year filter.
/// All fields are zero when no records match.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeeSummary {
    pub total_records: i64,
    pub total_fees: f64,
    pub total_collected: f64,
    pub total_pending: f64,
    pub paid_count: i64,
    pub partial_count: i64,
    pub pending_count: i64,
}

/// Filter parameters for the summary aggregate.
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    pub trade: Option<String>,
    pub academic_year: Option<String>,
}
