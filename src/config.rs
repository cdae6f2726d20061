use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: String,
    pub geocoder_base_url: String,
    pub geocoder_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:3000"),
            data_dir: var_or("DATA_DIR", "."),
            geocoder_base_url: var_or(
                "GEOCODER_BASE_URL",
                "https://nominatim.openstreetmap.org",
            ),
            geocoder_timeout_secs: var_or("GEOCODER_TIMEOUT_SECS", "5")
                .parse()
                .unwrap_or_else(|e| {
                    tracing::warn!("Invalid GEOCODER_TIMEOUT_SECS: {}, using 5", e);
                    5
                }),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}
