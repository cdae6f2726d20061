use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bawaba_backend::config::Config;
use bawaba_backend::handlers;
use bawaba_backend::services::geocoder::GeocoderService;
use bawaba_backend::store::CsvStore;
use bawaba_backend::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bawaba_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Bootstrap the CSV stores before accepting traffic
    let store = CsvStore::new(&config.data_dir);
    store.ensure_files();

    let geocoder = GeocoderService::new(
        config.geocoder_base_url.clone(),
        config.geocoder_timeout_secs,
    );

    let state = AppState { store, geocoder };

    // Frontend is served from arbitrary origins with credentials; mirror
    // every origin rather than using Any (which rejects credentials)
    let cors = CorsLayer::very_permissive();

    // Build router
    let app = Router::new()
        .route("/", get(hello_bawaba))
        .route("/vendors", get(handlers::vendor::get_vendors))
        .route("/items", get(handlers::item::get_items))
        .route("/order", post(handlers::order::create_order))
        .route("/upload", post(handlers::receipt::upload_receipt))
        .route("/market", get(handlers::market::get_market))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(
        "Server listening on {}",
        listener.local_addr().expect("listener has a local addr")
    );

    axum::serve(listener, app).await.expect("Server error");
}

async fn hello_bawaba() -> &'static str {
    "Hello from Bawaba Rewards Backend! 🍔"
}
