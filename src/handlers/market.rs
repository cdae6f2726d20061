use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::receipt::UploadRecord;
use crate::AppState;

/// Handler for GET /market. The full historical receipt feed, unfiltered
/// and unpaginated; an absent uploads store reads as an empty list.
pub async fn get_market(
    State(state): State<AppState>,
) -> Result<Json<Vec<UploadRecord>>, AppError> {
    let uploads = state.store.read_uploads().map_err(|e| {
        tracing::error!("Failed to read uploads: {}", e);
        e
    })?;

    tracing::debug!("Returning {} market records", uploads.len());
    Ok(Json(uploads))
}
