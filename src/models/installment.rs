//! Installment model: one scheduled sub-payment of a fee record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One installment of a fee record, sequence numbers 1-based and unique
/// within the parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Installment {
    pub installment_id: Uuid,
    pub fee_id: Uuid,
    pub sequence_number: i64,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub paid_amount: f64,
    pub status: String,
    pub payment_method: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl Installment {
    /// Balance still owed on this installment.
    pub fn remaining(&self) -> f64 {
        self.amount - self.paid_amount
    }
}

/// Planned installment rows derived from a create request.
#[derive(Debug, Clone)]
pub struct InstallmentPlan {
    pub amounts: Vec<f64>,
    pub due_dates: Vec<Option<NaiveDate>>,
}

impl InstallmentPlan {
    /// Split `total` into `count` installment amounts.
    ///
    /// Positions with a caller-supplied override use it as-is. When no
    /// overrides are supplied at all, the final installment absorbs the
    /// rounding remainder so the amounts sum exactly to `total`.
    pub fn build(
        total: f64,
        count: i64,
        overrides: &[Option<f64>],
        due_dates: &[Option<NaiveDate>],
    ) -> Self {
        let count = count as usize;
        let share = total / count as f64;
        let has_overrides = overrides.iter().any(|o| o.is_some());

        let mut amounts = Vec::with_capacity(count);
        for position in 0..count {
            let amount = match overrides.get(position).copied().flatten() {
                Some(explicit) => explicit,
                None if !has_overrides && position == count - 1 => {
                    total - amounts.iter().sum::<f64>()
                }
                None => share,
            };
            amounts.push(amount);
        }

        let due_dates = (0..count)
            .map(|position| due_dates.get(position).copied().flatten())
            .collect();

        Self { amounts, due_dates }
    }
}
