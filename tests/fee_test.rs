//! Fee record lifecycle tests: creation, installment plans, updates,
//! deletion, and listing.

mod common;

use chrono::{Datelike, NaiveDate, Utc};
use common::{fee_draft, installment_draft, test_db};
use fee_ledger_service::error::AppError;
use fee_ledger_service::models::{FeeFilter, FeeStatus, UpdateFeeRecord};
use uuid::Uuid;

#[tokio::test]
async fn create_fee_assigns_invoice_and_pending_status() {
    let db = test_db().await;

    let (fee, installments) = db
        .create_fee(&fee_draft("Ravi Kumar", 6000.0))
        .await
        .expect("Failed to create fee");

    assert_eq!(fee.student_name, "Ravi Kumar");
    assert_eq!(fee.amount, 6000.0);
    assert_eq!(fee.paid_amount, 0.0);
    assert_eq!(fee.status, "pending");
    assert!(installments.is_empty());

    let invoice = fee.invoice_number.expect("Invoice number not assigned");
    assert_eq!(invoice.len(), 11);
    assert!(invoice.starts_with("INV"));

    let year = Utc::now().year();
    assert_eq!(fee.academic_year, format!("{}-{}", year, year + 1));
}

#[tokio::test]
async fn create_fee_rejects_missing_fields_and_bad_amounts() {
    let db = test_db().await;

    let mut draft = fee_draft("", 1000.0);
    let err = db.create_fee(&draft).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");

    draft = fee_draft("A", 0.0);
    let err = db.create_fee(&draft).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");

    draft = fee_draft("A", -50.0);
    let err = db.create_fee(&draft).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");

    draft = fee_draft("A", 1000.0);
    draft.trade = String::new();
    let err = db.create_fee(&draft).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");

    // Nothing was persisted.
    let fees = db.list_fees(&FeeFilter::default()).await.unwrap();
    assert!(fees.is_empty());
}

#[tokio::test]
async fn create_fee_with_even_installments() {
    let db = test_db().await;

    let (fee, installments) = db
        .create_fee(&installment_draft("Sita Devi", 6000.0, 3))
        .await
        .expect("Failed to create fee");

    assert!(fee.installment_enabled);
    assert_eq!(fee.total_installments, 3);
    assert_eq!(installments.len(), 3);

    for (i, installment) in installments.iter().enumerate() {
        assert_eq!(installment.fee_id, fee.fee_id);
        assert_eq!(installment.sequence_number, (i + 1) as i64);
        assert_eq!(installment.amount, 2000.0);
        assert_eq!(installment.paid_amount, 0.0);
        assert_eq!(installment.status, "pending");
    }
}

#[tokio::test]
async fn uneven_split_sums_exactly_to_total() {
    let db = test_db().await;

    let (fee, installments) = db
        .create_fee(&installment_draft("Mohan Lal", 100.0, 3))
        .await
        .expect("Failed to create fee");

    assert_eq!(installments.len(), 3);
    assert_eq!(installments[0].amount, 100.0 / 3.0);
    assert_eq!(installments[1].amount, 100.0 / 3.0);
    // The last installment absorbs the remainder.
    let total: f64 = installments.iter().map(|i| i.amount).sum();
    assert_eq!(total, fee.amount);
}

#[tokio::test]
async fn installment_amount_and_due_date_overrides() {
    let db = test_db().await;

    let due = NaiveDate::from_ymd_opt(2026, 10, 15);
    let mut draft = installment_draft("Geeta Sharma", 900.0, 3);
    draft.installment_amounts = vec![Some(500.0), None, Some(100.0)];
    draft.installment_due_dates = vec![None, due];

    let (_, installments) = db.create_fee(&draft).await.expect("Failed to create fee");

    let amounts: Vec<f64> = installments.iter().map(|i| i.amount).collect();
    assert_eq!(amounts, vec![500.0, 300.0, 100.0]);
    assert_eq!(installments[0].due_date, None);
    assert_eq!(installments[1].due_date, due);
    assert_eq!(installments[2].due_date, None);
}

#[tokio::test]
async fn single_installment_count_creates_no_rows() {
    let db = test_db().await;

    let mut draft = fee_draft("Solo Payer", 1000.0);
    draft.installment_enabled = true;
    draft.total_installments = 1;

    let (fee, installments) = db.create_fee(&draft).await.expect("Failed to create fee");
    assert!(installments.is_empty());
    assert!(db.get_installments(fee.fee_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_fee_writes_only_supplied_fields() {
    let db = test_db().await;

    let (fee, _) = db
        .create_fee(&fee_draft("Before Update", 1000.0))
        .await
        .unwrap();

    let update = UpdateFeeRecord {
        mobile: Some("9876543210".to_string()),
        notes: Some("updated by office".to_string()),
        ..Default::default()
    };

    let updated = db
        .update_fee(fee.fee_id, &update)
        .await
        .unwrap()
        .expect("Fee should exist");

    assert_eq!(updated.mobile.as_deref(), Some("9876543210"));
    assert_eq!(updated.notes.as_deref(), Some("updated by office"));
    // Untouched fields survive.
    assert_eq!(updated.student_name, "Before Update");
    assert_eq!(updated.amount, 1000.0);
    assert_eq!(updated.status, "pending");
    assert_eq!(updated.invoice_number, fee.invoice_number);
}

#[tokio::test]
async fn update_fee_on_missing_id_returns_none() {
    let db = test_db().await;

    let result = db
        .update_fee(Uuid::new_v4(), &UpdateFeeRecord::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn update_fee_rejects_nonpositive_amount() {
    let db = test_db().await;

    let (fee, _) = db.create_fee(&fee_draft("Amount Guard", 1000.0)).await.unwrap();

    let update = UpdateFeeRecord {
        amount: Some(-1.0),
        ..Default::default()
    };
    let err = db.update_fee(fee.fee_id, &update).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "{err}");
}

#[tokio::test]
async fn delete_fee_removes_installments_first() {
    let db = test_db().await;

    let (fee, installments) = db
        .create_fee(&installment_draft("To Delete", 3000.0, 3))
        .await
        .unwrap();
    assert_eq!(installments.len(), 3);

    let deleted = db.delete_fee(fee.fee_id).await.unwrap();
    assert!(deleted);

    assert!(db.get_fee(fee.fee_id).await.unwrap().is_none());
    assert!(db.get_installments(fee.fee_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_fee_on_missing_id_returns_false() {
    let db = test_db().await;
    assert!(!db.delete_fee(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn list_fees_applies_filters() {
    let db = test_db().await;

    let admission_id = Uuid::new_v4();

    let mut electrician = fee_draft("Electrician Student", 1000.0);
    electrician.admission_id = Some(admission_id);
    db.create_fee(&electrician).await.unwrap();

    let mut fitter = fee_draft("Fitter Student", 2000.0);
    fitter.trade = "Fitter".to_string();
    fitter.academic_year = Some("2024-2025".to_string());
    db.create_fee(&fitter).await.unwrap();

    let all = db.list_fees(&FeeFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let by_trade = db
        .list_fees(&FeeFilter {
            trade: Some("Fitter".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_trade.len(), 1);
    assert_eq!(by_trade[0].student_name, "Fitter Student");

    let by_admission = db
        .list_fees(&FeeFilter {
            admission_id: Some(admission_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_admission.len(), 1);
    assert_eq!(by_admission[0].student_name, "Electrician Student");

    let by_year = db
        .list_fees(&FeeFilter {
            academic_year: Some("2024-2025".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_year.len(), 1);

    let paid_only = db
        .list_fees(&FeeFilter {
            status: Some(FeeStatus::Paid),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(paid_only.is_empty());
}
