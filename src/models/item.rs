use serde::{Deserialize, Serialize};

/// One row of the items store, returned verbatim by GET /items.
/// Vendor name is a foreign key by convention only; nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub vendor_name: String,
    pub item_name: String,
    pub price_kwd: f64,
    pub description: String,
}
