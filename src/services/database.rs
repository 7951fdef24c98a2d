//! Database service for fee-ledger-service.
//!
//! All ledger operations live here; handlers stay thin. The pool is owned by
//! this handle and injected into the application state at startup. Multi-row
//! operations (fee + installments creation, deletion, installment payment +
//! parent recompute) each run inside one transaction, and both payment paths
//! guard their update with the previously read paid amount so concurrent
//! payments surface as a conflict instead of a double credit.

use crate::error::AppError;
use crate::models::{
    CreateFeeRecord, FeeFilter, FeeRecord, FeeStatus, FeeSummary, Installment, InstallmentPlan,
    SummaryFilter, UpdateFeeRecord,
};
use crate::services::metrics::{
    DB_QUERY_DURATION, FEES_CREATED_TOTAL, PAYMENTS_TOTAL, PAYMENT_AMOUNT_TOTAL,
};
use crate::services::numbers;
use chrono::{Datelike, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

const FEE_COLUMNS: &str = "fee_id, admission_id, student_name, father_name, mobile, trade, \
    fee_type, amount, paid_amount, due_date, status, payment_method, payment_date, \
    receipt_number, invoice_number, notes, installment_enabled, total_installments, \
    academic_year, created_utc";

const INSTALLMENT_COLUMNS: &str = "installment_id, fee_id, sequence_number, amount, due_date, \
    paid_amount, status, payment_method, payment_date, receipt_number, notes, created_utc";

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the embedded database, creating the file if needed.
    #[instrument(skip(database_url), fields(service = "fee-ledger-service"))]
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        info!(max_connections = max_connections, "Opening SQLite database");

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        // The handle lives for the whole process; never recycle connections,
        // or an in-memory database would be lost with them.
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("SQLite connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Fee Record Operations
    // -------------------------------------------------------------------------

    /// Create a fee record and, when installments are enabled with a count
    /// above one, its installment rows. The whole creation is atomic.
    #[instrument(skip(self, input), fields(student_name = %input.student_name))]
    pub async fn create_fee(
        &self,
        input: &CreateFeeRecord,
    ) -> Result<(FeeRecord, Vec<Installment>), AppError> {
        validate_create_fee(input)?;

        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_fee"])
            .start_timer();

        let fee_id = Uuid::new_v4();
        let invoice_number = numbers::invoice_number();
        let academic_year = input
            .academic_year
            .clone()
            .unwrap_or_else(default_academic_year);
        let created_utc = Utc::now();

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to begin transaction: {}", e))
        })?;

        let fee = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            INSERT INTO fee_records (
                fee_id, admission_id, student_name, father_name, mobile, trade, fee_type,
                amount, paid_amount, due_date, status, invoice_number, notes,
                installment_enabled, total_installments, academic_year, created_utc
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9, 'pending', $10, $11, $12, $13, $14, $15)
            RETURNING {FEE_COLUMNS}
            "#
        ))
        .bind(fee_id)
        .bind(input.admission_id)
        .bind(&input.student_name)
        .bind(&input.father_name)
        .bind(&input.mobile)
        .bind(&input.trade)
        .bind(&input.fee_type)
        .bind(input.amount)
        .bind(input.due_date)
        .bind(&invoice_number)
        .bind(&input.notes)
        .bind(input.installment_enabled)
        .bind(input.total_installments)
        .bind(&academic_year)
        .bind(created_utc)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to create fee record: {}", e)))?;

        let mut installments = Vec::new();
        if input.installment_enabled && input.total_installments > 1 {
            let plan = InstallmentPlan::build(
                input.amount,
                input.total_installments,
                &input.installment_amounts,
                &input.installment_due_dates,
            );

            for (position, amount) in plan.amounts.iter().enumerate() {
                let installment = sqlx::query_as::<_, Installment>(&format!(
                    r#"
                    INSERT INTO installments (
                        installment_id, fee_id, sequence_number, amount, due_date,
                        paid_amount, status, created_utc
                    )
                    VALUES ($1, $2, $3, $4, $5, 0, 'pending', $6)
                    RETURNING {INSTALLMENT_COLUMNS}
                    "#
                ))
                .bind(Uuid::new_v4())
                .bind(fee_id)
                .bind((position + 1) as i64)
                .bind(amount)
                .bind(plan.due_dates[position])
                .bind(created_utc)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(anyhow::anyhow!(
                        "Failed to create installment {}: {}",
                        position + 1,
                        e
                    ))
                })?;
                installments.push(installment);
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to commit fee creation: {}", e))
        })?;

        timer.observe_duration();

        FEES_CREATED_TOTAL
            .with_label_values(&[fee.fee_type.as_str()])
            .inc();

        info!(
            fee_id = %fee.fee_id,
            invoice_number = %invoice_number,
            installments = installments.len(),
            "Fee record created"
        );

        Ok((fee, installments))
    }

    /// Get a fee record by ID.
    #[instrument(skip(self), fields(fee_id = %fee_id))]
    pub async fn get_fee(&self, fee_id: Uuid) -> Result<Option<FeeRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_fee"])
            .start_timer();

        let fee = sqlx::query_as::<_, FeeRecord>(&format!(
            "SELECT {FEE_COLUMNS} FROM fee_records WHERE fee_id = $1"
        ))
        .bind(fee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get fee record: {}", e)))?;

        timer.observe_duration();

        Ok(fee)
    }

    /// List fee records matching the filter, newest first.
    #[instrument(skip(self, filter))]
    pub async fn list_fees(&self, filter: &FeeFilter) -> Result<Vec<FeeRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_fees"])
            .start_timer();

        let status = filter.status.map(|s| s.as_str().to_string());

        let fees = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            SELECT {FEE_COLUMNS}
            FROM fee_records
            WHERE ($1 IS NULL OR admission_id = $1)
              AND ($2 IS NULL OR status = $2)
              AND ($3 IS NULL OR trade = $3)
              AND ($4 IS NULL OR academic_year = $4)
            ORDER BY created_utc DESC
            "#
        ))
        .bind(filter.admission_id)
        .bind(&status)
        .bind(&filter.trade)
        .bind(&filter.academic_year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list fee records: {}", e)))?;

        timer.observe_duration();

        Ok(fees)
    }

    /// Sparse update of a fee record. Returns `None` when the id does not
    /// exist; the boundary surfaces that as NotFound.
    #[instrument(skip(self, input), fields(fee_id = %fee_id))]
    pub async fn update_fee(
        &self,
        fee_id: Uuid,
        input: &UpdateFeeRecord,
    ) -> Result<Option<FeeRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["update_fee"])
            .start_timer();

        if let Some(amount) = input.amount {
            if !(amount > 0.0) {
                return Err(AppError::Validation(anyhow::anyhow!(
                    "amount must be a positive number"
                )));
            }
        }

        let status = input.status.map(|s| s.as_str().to_string());

        let fee = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            UPDATE fee_records
            SET student_name = COALESCE($2, student_name),
                father_name = COALESCE($3, father_name),
                mobile = COALESCE($4, mobile),
                trade = COALESCE($5, trade),
                fee_type = COALESCE($6, fee_type),
                amount = COALESCE($7, amount),
                due_date = COALESCE($8, due_date),
                notes = COALESCE($9, notes),
                status = COALESCE($10, status)
            WHERE fee_id = $1
            RETURNING {FEE_COLUMNS}
            "#
        ))
        .bind(fee_id)
        .bind(&input.student_name)
        .bind(&input.father_name)
        .bind(&input.mobile)
        .bind(&input.trade)
        .bind(&input.fee_type)
        .bind(input.amount)
        .bind(input.due_date)
        .bind(&input.notes)
        .bind(&status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to update fee record: {}", e)))?;

        timer.observe_duration();

        if let Some(ref fee) = fee {
            info!(fee_id = %fee.fee_id, "Fee record updated");
        }

        Ok(fee)
    }

    /// Delete a fee record and its installments atomically. Installments go
    /// first to honor the ownership order; the FK cascade is the backstop.
    #[instrument(skip(self), fields(fee_id = %fee_id))]
    pub async fn delete_fee(&self, fee_id: Uuid) -> Result<bool, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_fee"])
            .start_timer();

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to begin transaction: {}", e))
        })?;

        sqlx::query("DELETE FROM installments WHERE fee_id = $1")
            .bind(fee_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete installments: {}", e))
            })?;

        let result = sqlx::query("DELETE FROM fee_records WHERE fee_id = $1")
            .bind(fee_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete fee record: {}", e))
            })?;

        tx.commit().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to commit fee deletion: {}", e))
        })?;

        timer.observe_duration();

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(fee_id = %fee_id, "Fee record deleted");
        }

        Ok(deleted)
    }

    // -------------------------------------------------------------------------
    // Installment Operations
    // -------------------------------------------------------------------------

    /// Get the installments of a fee record in sequence order.
    #[instrument(skip(self), fields(fee_id = %fee_id))]
    pub async fn get_installments(&self, fee_id: Uuid) -> Result<Vec<Installment>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_installments"])
            .start_timer();

        let installments = sqlx::query_as::<_, Installment>(&format!(
            r#"
            SELECT {INSTALLMENT_COLUMNS}
            FROM installments
            WHERE fee_id = $1
            ORDER BY sequence_number
            "#
        ))
        .bind(fee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to get installments: {}", e))
        })?;

        timer.observe_duration();

        Ok(installments)
    }

    // -------------------------------------------------------------------------
    // Payment Operations
    // -------------------------------------------------------------------------

    /// Apply a payment against the fee record as a whole (not a specific
    /// installment). Returns the updated record and the receipt number.
    #[instrument(skip(self), fields(fee_id = %fee_id, paid_amount = paid_amount))]
    pub async fn pay_fee(
        &self,
        fee_id: Uuid,
        paid_amount: f64,
        payment_method: Option<String>,
        payment_date: Option<NaiveDate>,
    ) -> Result<(FeeRecord, String), AppError> {
        if !(paid_amount > 0.0) {
            return Err(AppError::Validation(anyhow::anyhow!(
                "paid_amount must be a positive number"
            )));
        }

        let timer = DB_QUERY_DURATION
            .with_label_values(&["pay_fee"])
            .start_timer();

        let fee = self
            .get_fee(fee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Fee record not found")))?;

        let remaining = fee.remaining();
        if paid_amount > remaining {
            return Err(AppError::Validation(anyhow::anyhow!(
                "Payment amount {} exceeds remaining balance {}",
                paid_amount,
                remaining
            )));
        }

        let new_paid = fee.paid_amount + paid_amount;
        let status = FeeStatus::derive(fee.amount, new_paid);
        let receipt_number = numbers::receipt_number();
        let method = payment_method.unwrap_or_else(|| "Cash".to_string());
        let date = payment_date.unwrap_or_else(|| Utc::now().date_naive());
        let fallback_invoice = numbers::invoice_number();

        // Guarded by the paid_amount we read: a concurrent payment that lands
        // first makes this update match zero rows.
        let updated = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            UPDATE fee_records
            SET paid_amount = $3,
                status = $4,
                payment_method = $5,
                payment_date = $6,
                receipt_number = $7,
                invoice_number = COALESCE(invoice_number, $8)
            WHERE fee_id = $1 AND paid_amount = $2
            RETURNING {FEE_COLUMNS}
            "#
        ))
        .bind(fee_id)
        .bind(fee.paid_amount)
        .bind(new_paid)
        .bind(status.as_str())
        .bind(&method)
        .bind(date)
        .bind(&receipt_number)
        .bind(&fallback_invoice)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to record payment: {}", e)))?
        .ok_or_else(|| {
            AppError::Conflict(anyhow::anyhow!(
                "Fee record was modified by a concurrent payment; retry"
            ))
        })?;

        timer.observe_duration();

        PAYMENTS_TOTAL.with_label_values(&[method.as_str()]).inc();
        PAYMENT_AMOUNT_TOTAL
            .with_label_values(&[method.as_str()])
            .inc_by(paid_amount);

        info!(
            fee_id = %updated.fee_id,
            receipt_number = %receipt_number,
            paid_amount = paid_amount,
            status = %updated.status,
            "Payment recorded"
        );

        Ok((updated, receipt_number))
    }

    /// Apply a payment against one installment and recompute the parent fee
    /// record from the full installment set, all in one transaction.
    #[instrument(skip(self), fields(fee_id = %fee_id, installment_id = %installment_id))]
    pub async fn pay_installment(
        &self,
        fee_id: Uuid,
        installment_id: Uuid,
        paid_amount: f64,
        payment_method: Option<String>,
        payment_date: Option<NaiveDate>,
    ) -> Result<(Installment, FeeRecord, String), AppError> {
        if !(paid_amount > 0.0) {
            return Err(AppError::Validation(anyhow::anyhow!(
                "paid_amount must be a positive number"
            )));
        }

        let timer = DB_QUERY_DURATION
            .with_label_values(&["pay_installment"])
            .start_timer();

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to begin transaction: {}", e))
        })?;

        let installment = sqlx::query_as::<_, Installment>(&format!(
            r#"
            SELECT {INSTALLMENT_COLUMNS}
            FROM installments
            WHERE fee_id = $1 AND installment_id = $2
            "#
        ))
        .bind(fee_id)
        .bind(installment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get installment: {}", e)))?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Installment not found")))?;

        let remaining = installment.remaining();
        if paid_amount > remaining {
            return Err(AppError::Validation(anyhow::anyhow!(
                "Payment amount {} exceeds remaining installment balance {}",
                paid_amount,
                remaining
            )));
        }

        let new_paid = installment.paid_amount + paid_amount;
        let status = FeeStatus::derive(installment.amount, new_paid);
        let receipt_number = numbers::receipt_number();
        let method = payment_method.unwrap_or_else(|| "Cash".to_string());
        let date = payment_date.unwrap_or_else(|| Utc::now().date_naive());

        let updated_installment = sqlx::query_as::<_, Installment>(&format!(
            r#"
            UPDATE installments
            SET paid_amount = $3,
                status = $4,
                payment_method = $5,
                payment_date = $6,
                receipt_number = $7
            WHERE installment_id = $1 AND paid_amount = $2
            RETURNING {INSTALLMENT_COLUMNS}
            "#
        ))
        .bind(installment_id)
        .bind(installment.paid_amount)
        .bind(new_paid)
        .bind(status.as_str())
        .bind(&method)
        .bind(date)
        .bind(&receipt_number)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to update installment: {}", e))
        })?
        .ok_or_else(|| {
            AppError::Conflict(anyhow::anyhow!(
                "Installment was modified by a concurrent payment; retry"
            ))
        })?;

        // Parent recompute: paid_amount is the sum over all installments;
        // status is paid iff all are paid, partially_paid iff any have money.
        let (total_rows, paid_sum, paid_rows, started_rows) =
            sqlx::query_as::<_, (i64, f64, i64, i64)>(
                r#"
                SELECT COUNT(*),
                       COALESCE(SUM(paid_amount), 0.0),
                       COALESCE(SUM(CASE WHEN status = 'paid' THEN 1 ELSE 0 END), 0),
                       COALESCE(SUM(CASE WHEN paid_amount > 0 THEN 1 ELSE 0 END), 0)
                FROM installments
                WHERE fee_id = $1
                "#,
            )
            .bind(fee_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to total installments: {}", e))
            })?;

        let parent_status = if paid_rows == total_rows {
            FeeStatus::Paid
        } else if started_rows > 0 {
            FeeStatus::PartiallyPaid
        } else {
            FeeStatus::Pending
        };

        let updated_fee = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            UPDATE fee_records
            SET paid_amount = $2,
                status = $3
            WHERE fee_id = $1
            RETURNING {FEE_COLUMNS}
            "#
        ))
        .bind(fee_id)
        .bind(paid_sum)
        .bind(parent_status.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to update fee record: {}", e))
        })?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Fee record not found")))?;

        tx.commit().await.map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to commit installment payment: {}", e))
        })?;

        timer.observe_duration();

        PAYMENTS_TOTAL.with_label_values(&[method.as_str()]).inc();
        PAYMENT_AMOUNT_TOTAL
            .with_label_values(&[method.as_str()])
            .inc_by(paid_amount);

        info!(
            fee_id = %fee_id,
            installment_id = %installment_id,
            sequence_number = updated_installment.sequence_number,
            receipt_number = %receipt_number,
            parent_status = %updated_fee.status,
            "Installment payment recorded"
        );

        Ok((updated_installment, updated_fee, receipt_number))
    }

    // -------------------------------------------------------------------------
    // Aggregation / Reporting
    // -------------------------------------------------------------------------

    /// Ledger-wide totals for an optional trade / academic-year filter.
    /// Zeroed totals when no rows match.
    #[instrument(skip(self, filter))]
    pub async fn fee_summary(&self, filter: &SummaryFilter) -> Result<FeeSummary, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fee_summary"])
            .start_timer();

        let summary = sqlx::query_as::<_, FeeSummary>(
            r#"
            SELECT COUNT(*) AS total_records,
                   COALESCE(SUM(amount), 0.0) AS total_fees,
                   COALESCE(SUM(paid_amount), 0.0) AS total_collected,
                   COALESCE(SUM(amount - paid_amount), 0.0) AS total_pending,
                   COALESCE(SUM(CASE WHEN status = 'paid' THEN 1 ELSE 0 END), 0) AS paid_count,
                   COALESCE(SUM(CASE WHEN status = 'partially_paid' THEN 1 ELSE 0 END), 0) AS partial_count,
                   COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending_count
            FROM fee_records
            WHERE ($1 IS NULL OR trade = $1)
              AND ($2 IS NULL OR academic_year = $2)
            "#,
        )
        .bind(&filter.trade)
        .bind(&filter.academic_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to compute summary: {}", e)))?;

        timer.observe_duration();

        Ok(summary)
    }

    /// Fee records with a payment inside the trailing window. The second
    /// clause keeps rows whose payment date was never stamped, e.g. fees paid
    /// purely through installments.
    #[instrument(skip(self))]
    pub async fn recent_payments(&self, window_days: i64) -> Result<Vec<FeeRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["recent_payments"])
            .start_timer();

        let cutoff = Utc::now().date_naive() - chrono::Duration::days(window_days);

        let fees = sqlx::query_as::<_, FeeRecord>(&format!(
            r#"
            SELECT {FEE_COLUMNS}
            FROM fee_records
            WHERE (payment_date IS NOT NULL AND payment_date >= $1 AND paid_amount > 0)
               OR (payment_date IS NULL AND paid_amount > 0
                   AND status IN ('paid', 'partially_paid'))
            ORDER BY COALESCE(payment_date, date(created_utc)) DESC, created_utc DESC
            "#
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to list recent payments: {}", e))
        })?;

        timer.observe_duration();

        Ok(fees)
    }
}

fn validate_create_fee(input: &CreateFeeRecord) -> Result<(), AppError> {
    if input.student_name.trim().is_empty() {
        return Err(AppError::Validation(anyhow::anyhow!(
            "student_name is required"
        )));
    }
    if input.trade.trim().is_empty() {
        return Err(AppError::Validation(anyhow::anyhow!("trade is required")));
    }
    if input.fee_type.trim().is_empty() {
        return Err(AppError::Validation(anyhow::anyhow!("fee_type is required")));
    }
    if !(input.amount > 0.0) || !input.amount.is_finite() {
        return Err(AppError::Validation(anyhow::anyhow!(
            "amount must be a positive number"
        )));
    }
    if input.total_installments < 1 {
        return Err(AppError::Validation(anyhow::anyhow!(
            "total_installments must be at least 1"
        )));
    }
    Ok(())
}

/// Academic year label for a session starting in the current calendar year,
/// e.g. `2026-2027`.
fn default_academic_year() -> String {
    let year = Utc::now().year();
    format!("{}-{}", year, year + 1)
}
