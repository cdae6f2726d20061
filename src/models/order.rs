use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::is_valid_wallet;

/// Request body for POST /order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub wallet_address: String,
    pub vendor_name: String,
    pub item: String,
    pub delivery_address: String,
}

impl CreateOrderRequest {
    /// Required-fields check first, wallet shape second. Runs before any
    /// side effect.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            &self.wallet_address,
            &self.vendor_name,
            &self.item,
            &self.delivery_address,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(AppError::missing_fields());
        }
        if !is_valid_wallet(&self.wallet_address) {
            return Err(AppError::invalid_wallet());
        }
        Ok(())
    }
}

/// One row of the orders store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub vendor: String,
    pub item: String,
    pub address: String,
    pub user_wallet: String,
    pub lat: f64,
    pub lon: f64,
    pub timestamp: String,
}

/// Response body for a successful POST /order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub status: String,
    pub order_id: String,
    pub reward: u64,
}
