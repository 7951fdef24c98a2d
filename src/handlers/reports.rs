//! Aggregation and reporting handlers.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    dtos::{RecentPaymentsQuery, SummaryQuery},
    error::AppError,
    models::{FeeRecord, FeeSummary, SummaryFilter},
    AppState,
};

const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Ledger-wide totals, optionally filtered by trade / academic year.
pub async fn fee_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<FeeSummary>, AppError> {
    let filter = SummaryFilter {
        trade: query.trade,
        academic_year: query.academic_year,
    };

    let summary = state.db.fee_summary(&filter).await?;
    Ok(Json(summary))
}

/// Fee records with a payment inside the trailing window (7 days by default).
pub async fn recent_payments(
    State(state): State<AppState>,
    Query(query): Query<RecentPaymentsQuery>,
) -> Result<Json<Vec<FeeRecord>>, AppError> {
    let window_days = query.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    if window_days < 1 {
        return Err(AppError::Validation(anyhow::anyhow!(
            "window_days must be at least 1"
        )));
    }

    let fees = state.db.recent_payments(window_days).await?;
    Ok(Json(fees))
}
