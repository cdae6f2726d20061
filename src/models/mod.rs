pub mod item;
pub mod order;
pub mod receipt;
pub mod vendor;

/// Wallet addresses must be `0x` followed by exactly 40 further characters.
/// No character-set check beyond the prefix.
pub fn is_valid_wallet(address: &str) -> bool {
    address.starts_with("0x") && address.len() == 42
}
