use serde::{Deserialize, Serialize};

/// One row of the vendors store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRecord {
    pub vendor_name: String,
    pub vendor_wallet: String,
    pub icon: String,
}

/// Value half of the GET /vendors map (keyed by vendor name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorInfo {
    pub vendor_wallet: String,
    pub icon: String,
}

impl VendorRecord {
    pub fn into_entry(self) -> (String, VendorInfo) {
        (
            self.vendor_name,
            VendorInfo {
                vendor_wallet: self.vendor_wallet,
                icon: self.icon,
            },
        )
    }
}
