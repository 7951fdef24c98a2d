//! Common test utilities for fee-ledger-service integration tests.

use fee_ledger_service::models::CreateFeeRecord;
use fee_ledger_service::services::Database;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,fee_ledger_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Open a fresh in-memory database with migrations applied.
///
/// One connection so the whole test shares the same in-memory database.
pub async fn test_db() -> Database {
    init_tracing();

    let db = Database::new("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    db.run_migrations()
        .await
        .expect("Failed to run migrations");
    db
}

/// A plain fee draft with no installment plan.
pub fn fee_draft(student_name: &str, amount: f64) -> CreateFeeRecord {
    CreateFeeRecord {
        admission_id: None,
        student_name: student_name.to_string(),
        father_name: None,
        mobile: None,
        trade: "Electrician".to_string(),
        fee_type: "Tuition".to_string(),
        amount,
        due_date: None,
        notes: None,
        installment_enabled: false,
        total_installments: 1,
        installment_amounts: Vec::new(),
        installment_due_dates: Vec::new(),
        academic_year: None,
    }
}

/// A fee draft split into `count` even installments.
pub fn installment_draft(student_name: &str, amount: f64, count: i64) -> CreateFeeRecord {
    CreateFeeRecord {
        installment_enabled: true,
        total_installments: count,
        ..fee_draft(student_name, amount)
    }
}
