use sha2::{Digest, Sha256};

/// Fixed point-currency reward granted per successful order.
pub const ORDER_REWARD: u64 = 210_000;

/// Derive an order id from the vendor and item names:
/// `{vendor}-{first 8 hex chars of SHA-256(item)}`.
///
/// Deterministic by construction; truncation collisions across different
/// items are accepted.
pub fn derive_order_id(vendor_name: &str, item_name: &str) -> String {
    let digest = Sha256::digest(item_name.as_bytes());
    let prefix = &hex::encode(digest)[..8];
    format!("{}-{}", vendor_name, prefix)
}
