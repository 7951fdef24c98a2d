//! Fee record handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    dtos::{
        CreateFeeRequest, CreateFeeResponse, FeeDetailResponse, ListFeesQuery, PayRequest,
        PaymentReceiptResponse, UpdateFeeRequest,
    },
    error::AppError,
    models::{FeeFilter, FeeRecord, FeeStatus},
    AppState,
};

/// Create a fee record, optionally with an installment plan.
pub async fn create_fee(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeeRequest>,
) -> Result<(StatusCode, Json<CreateFeeResponse>), AppError> {
    let (fee, installments) = state.db.create_fee(&payload.into()).await?;

    tracing::info!(
        fee_id = %fee.fee_id,
        installments = installments.len(),
        "Fee record created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateFeeResponse {
            fee_id: fee.fee_id,
            // Always assigned at creation.
            invoice_number: fee.invoice_number.unwrap_or_default(),
        }),
    ))
}

/// List fee records matching the query filter.
pub async fn list_fees(
    State(state): State<AppState>,
    Query(query): Query<ListFeesQuery>,
) -> Result<Json<Vec<FeeRecord>>, AppError> {
    let filter = FeeFilter {
        admission_id: query.admission_id,
        status: query.status.as_deref().map(FeeStatus::from_string),
        trade: query.trade,
        academic_year: query.academic_year,
    };

    let fees = state.db.list_fees(&filter).await?;
    Ok(Json(fees))
}

/// Get a fee record with its installments (when installment-enabled).
pub async fn get_fee(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
) -> Result<Json<FeeDetailResponse>, AppError> {
    let fee = state
        .db
        .get_fee(fee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Fee record not found")))?;

    let installments = if fee.installment_enabled {
        state.db.get_installments(fee_id).await?
    } else {
        Vec::new()
    };

    Ok(Json(FeeDetailResponse { fee, installments }))
}

/// Sparse update of a fee record.
pub async fn update_fee(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
    Json(payload): Json<UpdateFeeRequest>,
) -> Result<Json<FeeRecord>, AppError> {
    let fee = state
        .db
        .update_fee(fee_id, &payload.into())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Fee record not found")))?;

    Ok(Json(fee))
}

/// Delete a fee record and its installments.
pub async fn delete_fee(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = state.db.delete_fee(fee_id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Fee record not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Apply a payment against the fee record as a whole.
pub async fn pay_fee(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
    Json(payload): Json<PayRequest>,
) -> Result<Json<PaymentReceiptResponse>, AppError> {
    let (fee, receipt_number) = state
        .db
        .pay_fee(
            fee_id,
            payload.paid_amount.0,
            payload.payment_method,
            payload.payment_date,
        )
        .await?;

    Ok(Json(PaymentReceiptResponse {
        receipt_number,
        invoice_number: fee.invoice_number.clone(),
        status: fee.status.clone(),
        paid_amount: fee.paid_amount,
        remaining: fee.remaining(),
    }))
}
