//! Request/response shapes for the HTTP boundary.
//!
//! The original admin API was loose about scalar types: flags arrived as
//! `true`, `1` or `"1"`, and amounts as numbers or numeric strings. The
//! [`BoolFlag`] and [`Amount`] wrappers keep that tolerance.

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CreateFeeRecord, FeeRecord, FeeStatus, Installment, UpdateFeeRecord};

/// A monetary amount that accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                Ok(Amount(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                Ok(Amount(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                v.trim()
                    .parse::<f64>()
                    .map(Amount)
                    .map_err(|_| E::custom(format!("invalid amount: {v:?}")))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

/// A flag that accepts `true`, `1` or `"1"`/`"true"`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoolFlag(pub bool);

impl<'de> Deserialize<'de> for BoolFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoolFlagVisitor;

        impl Visitor<'_> for BoolFlagVisitor {
            type Value = BoolFlag;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a boolean, 0/1, or a boolean-like string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<BoolFlag, E> {
                Ok(BoolFlag(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<BoolFlag, E> {
                Ok(BoolFlag(v != 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<BoolFlag, E> {
                Ok(BoolFlag(v != 0))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BoolFlag, E> {
                Ok(BoolFlag(matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )))
            }
        }

        deserializer.deserialize_any(BoolFlagVisitor)
    }
}

// -----------------------------------------------------------------------------
// Requests
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateFeeRequest {
    pub admission_id: Option<Uuid>,
    pub student_name: String,
    pub father_name: Option<String>,
    pub mobile: Option<String>,
    pub trade: String,
    pub fee_type: String,
    pub amount: Amount,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub installment_enabled: BoolFlag,
    #[serde(default = "default_total_installments")]
    pub total_installments: i64,
    #[serde(default)]
    pub installment_amounts: Vec<Option<Amount>>,
    #[serde(default)]
    pub installment_due_dates: Vec<Option<NaiveDate>>,
    pub academic_year: Option<String>,
}

fn default_total_installments() -> i64 {
    1
}

impl From<CreateFeeRequest> for CreateFeeRecord {
    fn from(req: CreateFeeRequest) -> Self {
        CreateFeeRecord {
            admission_id: req.admission_id,
            student_name: req.student_name,
            father_name: req.father_name,
            mobile: req.mobile,
            trade: req.trade,
            fee_type: req.fee_type,
            amount: req.amount.0,
            due_date: req.due_date,
            notes: req.notes,
            installment_enabled: req.installment_enabled.0,
            total_installments: req.total_installments,
            installment_amounts: req
                .installment_amounts
                .into_iter()
                .map(|a| a.map(|a| a.0))
                .collect(),
            installment_due_dates: req.installment_due_dates,
            academic_year: req.academic_year,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFeeRequest {
    pub student_name: Option<String>,
    pub father_name: Option<String>,
    pub mobile: Option<String>,
    pub trade: Option<String>,
    pub fee_type: Option<String>,
    pub amount: Option<Amount>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateFeeRequest> for UpdateFeeRecord {
    fn from(req: UpdateFeeRequest) -> Self {
        UpdateFeeRecord {
            student_name: req.student_name,
            father_name: req.father_name,
            mobile: req.mobile,
            trade: req.trade,
            fee_type: req.fee_type,
            amount: req.amount.map(|a| a.0),
            due_date: req.due_date,
            notes: req.notes,
            status: req.status.as_deref().map(FeeStatus::from_string),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayRequest {
    pub paid_amount: Amount,
    pub payment_method: Option<String>,
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListFeesQuery {
    pub admission_id: Option<Uuid>,
    pub status: Option<String>,
    pub trade: Option<String>,
    pub academic_year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub trade: Option<String>,
    pub academic_year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentPaymentsQuery {
    pub window_days: Option<i64>,
}

// -----------------------------------------------------------------------------
// Responses
// -----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CreateFeeResponse {
    pub fee_id: Uuid,
    pub invoice_number: String,
}

#[derive(Debug, Serialize)]
pub struct FeeDetailResponse {
    pub fee: FeeRecord,
    pub installments: Vec<Installment>,
}

#[derive(Debug, Serialize)]
pub struct PaymentReceiptResponse {
    pub receipt_number: String,
    pub invoice_number: Option<String>,
    pub status: String,
    pub paid_amount: f64,
    pub remaining: f64,
}

#[derive(Debug, Serialize)]
pub struct InstallmentReceiptResponse {
    pub receipt_number: String,
    pub total_paid: f64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        let parsed: Amount = serde_json::from_str("6000").unwrap();
        assert_eq!(parsed.0, 6000.0);
        let parsed: Amount = serde_json::from_str("6000.5").unwrap();
        assert_eq!(parsed.0, 6000.5);
        let parsed: Amount = serde_json::from_str("\"6000\"").unwrap();
        assert_eq!(parsed.0, 6000.0);
        assert!(serde_json::from_str::<Amount>("\"not a number\"").is_err());
    }

    #[test]
    fn bool_flag_accepts_legacy_forms() {
        for input in ["true", "1", "\"1\"", "\"true\"", "\"YES\""] {
            let parsed: BoolFlag = serde_json::from_str(input).unwrap();
            assert!(parsed.0, "input {input} should be truthy");
        }
        for input in ["false", "0", "\"0\"", "\"no\""] {
            let parsed: BoolFlag = serde_json::from_str(input).unwrap();
            assert!(!parsed.0, "input {input} should be falsy");
        }
    }

    #[test]
    fn create_request_defaults() {
        let req: CreateFeeRequest = serde_json::from_str(
            r#"{
                "student_name": "A",
                "trade": "Electrician",
                "fee_type": "Tuition",
                "amount": "6000"
            }"#,
        )
        .unwrap();
        assert!(!req.installment_enabled.0);
        assert_eq!(req.total_installments, 1);
        assert_eq!(req.amount.0, 6000.0);
    }
}
