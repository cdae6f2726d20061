use axum::{
    routing::{get, post},
    Router,
};
use tempfile::TempDir;

use bawaba_backend::handlers;
use bawaba_backend::services::geocoder::GeocoderService;
use bawaba_backend::store::CsvStore;
use bawaba_backend::AppState;

/// Geocoder endpoint that never answers: reserved TEST-NET address, so every
/// lookup exercises the (0, 0) fallback without real network traffic.
pub const DEAD_GEOCODER_URL: &str = "http://192.0.2.1:9";

/// Build an AppState over a throwaway data directory. The TempDir must stay
/// alive for the duration of the test or the store files vanish.
pub fn setup_test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("Failed to create temp data dir");
    let store = CsvStore::new(dir.path());
    store.ensure_files();

    let geocoder = GeocoderService::new(DEAD_GEOCODER_URL.to_string(), 1);

    (dir, AppState { store, geocoder })
}

/// Router with the full public surface, minus the CORS/trace layers that
/// main adds.
pub fn build_test_router(state: AppState) -> Router {
    Router::new()
        .route("/vendors", get(handlers::vendor::get_vendors))
        .route("/items", get(handlers::item::get_items))
        .route("/order", post(handlers::order::create_order))
        .route("/upload", post(handlers::receipt::upload_receipt))
        .route("/market", get(handlers::market::get_market))
        .with_state(state)
}
