use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = "bawaba_rewards";

/// Best-effort address → (lat, lon) lookup against a Nominatim-compatible
/// endpoint. Every failure mode degrades to the (0, 0) sentinel; a geocoding
/// outage must never block or fail an order.
#[derive(Clone)]
pub struct GeocoderService {
    client: Client,
    base_url: String,
    cache: Arc<Cache<String, Option<(f64, f64)>>>,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl GeocoderService {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(3600))
            .build();

        // The timeout bounds the whole request; builder() only fails on TLS
        // backend misconfiguration, so fall back to a default client there.
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build geocoder HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url,
            cache: Arc::new(cache),
        }
    }

    /// Resolve an address, substituting (0, 0) on any failure or no-match.
    pub async fn locate_or_default(&self, address: &str) -> (f64, f64) {
        match self.locate(address).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                tracing::warn!("No geocoding match for {:?}, using (0, 0)", address);
                (0.0, 0.0)
            }
            Err(e) => {
                tracing::warn!("Geocoding failed for {:?}: {}, using (0, 0)", address, e);
                (0.0, 0.0)
            }
        }
    }

    async fn locate(
        &self,
        address: &str,
    ) -> Result<Option<(f64, f64)>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(cached) = self.cache.get(address).await {
            tracing::debug!("Geocoder cache hit for {:?}", address);
            return Ok(cached);
        }

        tracing::info!("Geocoding {:?} via Nominatim", address);

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Nominatim error {}: {}", status, error_text).into());
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        let coords = match places.first() {
            Some(place) => Some((place.lat.parse::<f64>()?, place.lon.parse::<f64>()?)),
            None => None,
        };

        self.cache.insert(address.to_string(), coords).await;

        Ok(coords)
    }
}
