use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::item::ItemRecord;
use crate::AppState;

/// Handler for GET /items. Returns every item row verbatim, in file order;
/// an absent items store reads as an empty list.
pub async fn get_items(State(state): State<AppState>) -> Result<Json<Vec<ItemRecord>>, AppError> {
    let items = state.store.read_items().map_err(|e| {
        tracing::error!("Failed to read items: {}", e);
        e
    })?;

    tracing::debug!("Returning {} items", items.len());
    Ok(Json(items))
}
