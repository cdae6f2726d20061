use axum::{extract::State, Json};
use std::collections::HashMap;

use crate::error::AppError;
use crate::models::vendor::VendorInfo;
use crate::AppState;

/// Handler for GET /vendors. Returns the vendor map keyed by name.
/// A missing or unreadable vendors store is a hard 500 here, unlike the
/// other list endpoints.
pub async fn get_vendors(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, VendorInfo>>, AppError> {
    let vendors = state.store.read_vendors().map_err(|e| {
        tracing::error!("Failed to read vendors: {}", e);
        e
    })?;

    tracing::debug!("Returning {} vendors", vendors.len());
    Ok(Json(vendors))
}
