use axum::{extract::State, Json};

use crate::error::AppError;
use crate::handlers::local_timestamp;
use crate::models::order::{CreateOrderRequest, CreateOrderResponse, OrderRecord};
use crate::services::orders::{derive_order_id, ORDER_REWARD};
use crate::AppState;

/// Handler for POST /order.
///
/// Validates, derives the order id, geocodes the delivery address
/// (best-effort; any failure substitutes (0, 0)), then appends one order
/// row. Only the append can fail the request after validation passes.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    payload.validate()?;

    let order_id = derive_order_id(&payload.vendor_name, &payload.item);
    let (lat, lon) = state
        .geocoder
        .locate_or_default(&payload.delivery_address)
        .await;

    let record = OrderRecord {
        order_id: order_id.clone(),
        vendor: payload.vendor_name,
        item: payload.item,
        address: payload.delivery_address,
        user_wallet: payload.wallet_address,
        lat,
        lon,
        timestamp: local_timestamp(),
    };
    state.store.append_order(&record).map_err(|e| {
        tracing::error!("Failed to append order {}: {}", order_id, e);
        e
    })?;

    tracing::info!("Recorded order {} at ({}, {})", order_id, lat, lon);

    Ok(Json(CreateOrderResponse {
        status: "success".to_string(),
        order_id,
        reward: ORDER_REWARD,
    }))
}
