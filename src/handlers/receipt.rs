use axum::{extract::State, Json};

use crate::error::AppError;
use crate::handlers::local_timestamp;
use crate::models::receipt::{UploadReceiptRequest, UploadReceiptResponse, UploadRecord};
use crate::services::receipt_rules::{categorize, UPLOAD_REWARD};
use crate::AppState;

/// Handler for POST /upload.
///
/// Validates, categorizes the receipt from its vendor name, and appends one
/// upload row. The optional `file` field is accepted and discarded.
pub async fn upload_receipt(
    State(state): State<AppState>,
    Json(payload): Json<UploadReceiptRequest>,
) -> Result<Json<UploadReceiptResponse>, AppError> {
    payload.validate()?;

    let (category, icon) = categorize(&payload.vendor);

    let record = UploadRecord {
        order_id: payload.order_id,
        vendor: payload.vendor,
        user_wallet: payload.wallet_address,
        timestamp: local_timestamp(),
        item: payload.item,
        price_kwd: payload.price_kwd,
        category: category.to_string(),
        icon: icon.to_string(),
    };
    state.store.append_upload(&record).map_err(|e| {
        tracing::error!("Failed to append upload {}: {}", record.order_id, e);
        e
    })?;

    tracing::info!(
        "Recorded receipt {} for {} as {}",
        record.order_id,
        record.vendor,
        record.category
    );

    Ok(Json(UploadReceiptResponse {
        status: "success".to_string(),
        reward: UPLOAD_REWARD,
    }))
}
