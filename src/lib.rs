// src/lib.rs

use services::geocoder::GeocoderService;
use store::CsvStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CsvStore,
    pub geocoder: GeocoderService,
}

pub mod config;
pub mod error;
pub mod store;

pub mod services {
    pub mod geocoder;
    pub mod orders;
    pub mod receipt_rules;
}

pub mod models;
pub mod handlers;
