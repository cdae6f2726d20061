use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::is_valid_wallet;

/// Request body for POST /upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceiptRequest {
    pub wallet_address: String,
    pub order_id: String,
    pub vendor: String,
    pub item: String,
    pub price_kwd: f64,
    /// Optional attachment reference. Accepted for wire compatibility but
    /// never inspected or stored.
    #[serde(default)]
    pub file: Option<String>,
}

impl UploadReceiptRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [&self.wallet_address, &self.order_id, &self.vendor, &self.item];
        if required.iter().any(|field| field.is_empty()) {
            return Err(AppError::missing_fields());
        }
        if !is_valid_wallet(&self.wallet_address) {
            return Err(AppError::invalid_wallet());
        }
        Ok(())
    }
}

/// One row of the uploads store; also the GET /market record shape.
/// Category and icon are derived at write time from the vendor name and are
/// not re-derivable later, since the rule table may evolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    pub order_id: String,
    pub vendor: String,
    pub user_wallet: String,
    pub timestamp: String,
    pub item: String,
    pub price_kwd: f64,
    pub category: String,
    pub icon: String,
}

/// Response body for a successful POST /upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceiptResponse {
    pub status: String,
    pub reward: u64,
}
