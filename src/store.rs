use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppError;
use crate::models::item::ItemRecord;
use crate::models::order::OrderRecord;
use crate::models::receipt::UploadRecord;
use crate::models::vendor::{VendorInfo, VendorRecord};

pub const VENDORS_FILE: &str = "vendors.csv";
pub const ITEMS_FILE: &str = "items.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const UPLOADS_FILE: &str = "uploads.csv";

const VENDOR_HEADER: [&str; 3] = ["vendor_name", "vendor_wallet", "icon"];
const ITEM_HEADER: [&str; 4] = ["vendor_name", "item_name", "price_kwd", "description"];
const ORDER_HEADER: [&str; 8] = [
    "order_id", "vendor", "item", "address", "user_wallet", "lat", "lon", "timestamp",
];
const UPLOAD_HEADER: [&str; 8] = [
    "order_id", "vendor", "user_wallet", "timestamp", "item", "price_kwd", "category", "icon",
];

/// Append-only CSV stores under a single data directory. Ensured once at
/// startup, then shared by every handler; each append writes one complete
/// row so concurrent writers cannot split a record across lines.
#[derive(Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Create any missing store file with its header row; the vendors store
    /// also gets its two seed rows. A failure here is logged and skipped
    /// rather than propagated — the service must come up even on a read-only
    /// data dir, and the affected writes then fail per-request.
    pub fn ensure_files(&self) {
        for (file, header) in [
            (VENDORS_FILE, &VENDOR_HEADER[..]),
            (ITEMS_FILE, &ITEM_HEADER[..]),
            (ORDERS_FILE, &ORDER_HEADER[..]),
            (UPLOADS_FILE, &UPLOAD_HEADER[..]),
        ] {
            let path = self.path(file);
            if path.exists() {
                continue;
            }
            if let Err(e) = self.create_with_header(&path, header) {
                tracing::error!("Failed to create {}: {}", path.display(), e);
                continue;
            }
            tracing::info!("Created {}", path.display());

            if file == VENDORS_FILE {
                if let Err(e) = self.seed_vendors() {
                    tracing::error!("Failed to seed vendors: {}", e);
                }
            }
        }
    }

    fn create_with_header(&self, path: &Path, header: &[&str]) -> Result<(), AppError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(header)?;
        writer.flush()?;
        Ok(())
    }

    fn seed_vendors(&self) -> Result<(), AppError> {
        for (name, wallet, icon) in [
            ("FluxEats", "0xVendor1", "🌌"),
            ("NebulaBites", "0xVendor2", "☄️"),
        ] {
            self.append(
                VENDORS_FILE,
                &VendorRecord {
                    vendor_name: name.to_string(),
                    vendor_wallet: wallet.to_string(),
                    icon: icon.to_string(),
                },
            )?;
        }
        Ok(())
    }

    /// Full parse of the vendors store into name → attributes; duplicate
    /// names resolve last-one-wins. Unlike the other reads, a missing file
    /// is an error here.
    pub fn read_vendors(&self) -> Result<HashMap<String, VendorInfo>, AppError> {
        let mut reader = csv::Reader::from_path(self.path(VENDORS_FILE))?;
        let mut vendors = HashMap::new();
        for row in reader.deserialize::<VendorRecord>() {
            let (name, info) = row?.into_entry();
            vendors.insert(name, info);
        }
        Ok(vendors)
    }

    /// All item rows in file order; a missing file reads as empty.
    pub fn read_items(&self) -> Result<Vec<ItemRecord>, AppError> {
        self.read_all(ITEMS_FILE)
    }

    /// All upload rows in file order; a missing file reads as empty.
    pub fn read_uploads(&self) -> Result<Vec<UploadRecord>, AppError> {
        self.read_all(UPLOADS_FILE)
    }

    fn read_all<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, AppError> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(path)?;
        reader.deserialize().collect::<Result<Vec<T>, _>>().map_err(Into::into)
    }

    pub fn append_order(&self, record: &OrderRecord) -> Result<(), AppError> {
        self.append(ORDERS_FILE, record)
    }

    pub fn append_upload(&self, record: &UploadRecord) -> Result<(), AppError> {
        self.append(UPLOADS_FILE, record)
    }

    fn append<T: Serialize>(&self, file: &str, record: &T) -> Result<(), AppError> {
        let handle = OpenOptions::new()
            .append(true)
            .open(self.path(file))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(handle);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}
