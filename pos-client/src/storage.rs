//! Durable slot storage
//!
//! Carts survive restarts as two JSON documents on disk, one for the
//! table roster and one for takeaway slots. Loading is deliberately
//! forgiving: a missing, unreadable or corrupt file yields the provided
//! default instead of an error, so a damaged cache can never lock the
//! operator out. Saving writes the whole collection at once.

use std::fs;
use std::path::{Path, PathBuf};

use shared::order::OrderSlot;

use crate::error::{ClientError, ClientResult};

const TABLES_FILE: &str = "tables.json";
const TAKEAWAY_FILE: &str = "takeaway.json";

/// File-backed store for the two slot collections
#[derive(Debug, Clone)]
pub struct SlotStorage {
    tables_path: PathBuf,
    takeaway_path: PathBuf,
}

impl SlotStorage {
    /// Store rooted at `dir` (created on first save if absent)
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            tables_path: dir.join(TABLES_FILE),
            takeaway_path: dir.join(TAKEAWAY_FILE),
        }
    }

    pub fn load_tables(&self, default: impl FnOnce() -> Vec<OrderSlot>) -> Vec<OrderSlot> {
        load_or_default(&self.tables_path, default)
    }

    pub fn load_takeaway(&self) -> Vec<OrderSlot> {
        load_or_default(&self.takeaway_path, Vec::new)
    }

    pub fn save_tables(&self, slots: &[OrderSlot]) -> ClientResult<()> {
        save(&self.tables_path, slots)
    }

    pub fn save_takeaway(&self, slots: &[OrderSlot]) -> ClientResult<()> {
        save(&self.takeaway_path, slots)
    }
}

fn load_or_default(path: &Path, default: impl FnOnce() -> Vec<OrderSlot>) -> Vec<OrderSlot> {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(slots) => slots,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "corrupt slot file, starting fresh");
                default()
            }
        },
        Err(_) => default(),
    }
}

fn save(path: &Path, slots: &[OrderSlot]) -> ClientResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ClientError::Storage(format!("create {}: {err}", parent.display())))?;
    }
    let raw = serde_json::to_string(slots)?;
    fs::write(path, raw)
        .map_err(|err| ClientError::Storage(format!("write {}: {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::LineItem;

    fn roster() -> Vec<OrderSlot> {
        (1..=3).map(OrderSlot::new).collect()
    }

    #[test]
    fn missing_file_yields_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());
        assert_eq!(storage.load_tables(roster).len(), 3);
        assert!(storage.load_takeaway().is_empty());
    }

    #[test]
    fn corrupt_file_yields_the_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TABLES_FILE), "{not json").unwrap();
        let storage = SlotStorage::new(dir.path());
        assert_eq!(storage.load_tables(roster).len(), 3);
    }

    #[test]
    fn saved_slots_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        let mut slots = roster();
        slots[0].orders.push(LineItem {
            name: "Trà Sữa".into(),
            price: 25000,
            quantity: 2,
            note: None,
            size: None,
        });
        storage.save_tables(&slots).unwrap();

        let loaded = storage.load_tables(Vec::new);
        assert_eq!(loaded, slots);
        assert!(loaded[0].is_active());
    }
}
