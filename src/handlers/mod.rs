pub mod item;
pub mod market;
pub mod order;
pub mod receipt;
pub mod vendor;

/// Local-clock ISO-8601 timestamp stamped onto every appended row.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
