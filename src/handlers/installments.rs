//! Installment handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    dtos::{InstallmentReceiptResponse, PayRequest},
    error::AppError,
    models::Installment,
    AppState,
};

/// List the installments of a fee record.
pub async fn list_installments(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
) -> Result<Json<Vec<Installment>>, AppError> {
    // 404 for an unknown fee id rather than an empty list.
    state
        .db
        .get_fee(fee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Fee record not found")))?;

    let installments = state.db.get_installments(fee_id).await?;
    Ok(Json(installments))
}

/// Apply a payment against one installment; the parent fee record is
/// recomputed in the same transaction.
pub async fn pay_installment(
    State(state): State<AppState>,
    Path((fee_id, installment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PayRequest>,
) -> Result<Json<InstallmentReceiptResponse>, AppError> {
    let (_installment, fee, receipt_number) = state
        .db
        .pay_installment(
            fee_id,
            installment_id,
            payload.paid_amount.0,
            payload.payment_method,
            payload.payment_date,
        )
        .await?;

    Ok(Json(InstallmentReceiptResponse {
        receipt_number,
        total_paid: fee.paid_amount,
        status: fee.status,
    }))
}
