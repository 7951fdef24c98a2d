//! Fee record model: one obligation owed by a student for one fee type in
//! one academic year.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment status of a fee record or installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Pending,
    PartiallyPaid,
    Paid,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "pending",
            FeeStatus::PartiallyPaid => "partially_paid",
            FeeStatus::Paid => "paid",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s.to_ascii_lowercase().replace(' ', "_").as_str() {
            "paid" => FeeStatus::Paid,
            "partially_paid" => FeeStatus::PartiallyPaid,
            _ => FeeStatus::Pending,
        }
    }

    /// Derive the status from the amount owed and the amount paid so far.
    ///
    /// `paid` iff paid_amount >= amount; `partially_paid` iff
    /// 0 < paid_amount < amount; else `pending`.
    pub fn derive(amount: f64, paid_amount: f64) -> Self {
        if paid_amount >= amount {
            FeeStatus::Paid
        } else if paid_amount > 0.0 {
            FeeStatus::PartiallyPaid
        } else {
            FeeStatus::Pending
        }
    }
}

/// One fee obligation, optionally split into installments.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeeRecord {
    pub fee_id: Uuid,
    pub admission_id: Option<Uuid>,
    pub student_name: String,
    pub father_name: Option<String>,
    pub mobile: Option<String>,
    pub trade: String,
    pub fee_type: String,
    pub amount: f64,
    pub paid_amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub payment_method: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub receipt_number: Option<String>,
    pub invoice_number: Option<String>,
    pub notes: Option<String>,
    pub installment_enabled: bool,
    pub total_installments: i64,
    pub academic_year: String,
    pub created_utc: DateTime<Utc>,
}

impl FeeRecord {
    /// Balance still owed on this record.
    pub fn remaining(&self) -> f64 {
        self.amount - self.paid_amount
    }
}

/// Input for creating a fee record.
#[derive(Debug, Clone)]
pub struct CreateFeeRecord {
    pub admission_id: Option<Uuid>,
    pub student_name: String,
    pub father_name: Option<String>,
    pub mobile: Option<String>,
    pub trade: String,
    pub fee_type: String,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub installment_enabled: bool,
    pub total_installments: i64,
    /// Per-position overrides of the even split, 1-based by index.
    pub installment_amounts: Vec<Option<f64>>,
    pub installment_due_dates: Vec<Option<NaiveDate>>,
    /// Defaults to `"<year>-<year+1>"` when absent.
    pub academic_year: Option<String>,
}

/// Sparse update of a fee record; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFeeRecord {
    pub student_name: Option<String>,
    pub father_name: Option<String>,
    pub mobile: Option<String>,
    pub trade: Option<String>,
    pub fee_type: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: Option<FeeStatus>,
}

/// Filter parameters for listing fee records.
#[derive(Debug, Clone, Default)]
pub struct FeeFilter {
    pub admission_id: Option<Uuid>,
    pub status: Option<FeeStatus>,
    pub trade: Option<String>,
    pub academic_year: Option<String>,
}
