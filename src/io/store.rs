//! Persistence boundary for the work order collection.
//!
//! The whole collection lives under a single key as an ordered sequence of
//! document envelopes. Loading is infallible from the caller's point of
//! view: a missing, corrupt, or empty blob is discarded and replaced by the
//! seed collection, which is persisted back immediately.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::warn;
use thiserror::Error;

use crate::io::seed;
use crate::model::{WorkOrder, WorkOrderDocument};

/// Storage key; also the file stem of the on-disk blob.
pub const STORAGE_KEY: &str = "work-order-schedule-v3";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write schedule data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize schedule data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read/write contract for the persisted work order collection.
pub trait ScheduleStore {
    /// The stored collection, or `None` when the blob is missing or unusable.
    fn load(&self) -> Option<Vec<WorkOrder>>;

    /// Fully overwrite the stored blob with the given collection.
    fn save(&self, orders: &[WorkOrder]) -> Result<(), StoreError>;
}

/// JSON-file-backed store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform data directory, e.g.
    /// `~/.local/share/work-order-schedule/work-order-schedule-v3.json`.
    pub fn in_data_dir() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", "work-order-schedule")?;
        Some(Self::new(dirs.data_dir().join(format!("{STORAGE_KEY}.json"))))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> Option<Vec<WorkOrder>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let documents: Vec<WorkOrderDocument> = match serde_json::from_str(&raw) {
            Ok(documents) => documents,
            Err(err) => {
                warn!("discarding stored schedule that failed to parse: {err}");
                return None;
            }
        };
        if documents.is_empty() {
            warn!("discarding empty stored schedule");
            return None;
        }
        let orders: Option<Vec<WorkOrder>> =
            documents.iter().map(WorkOrderDocument::to_order).collect();
        if orders.is_none() {
            warn!("discarding stored schedule with malformed records");
        }
        orders
    }

    fn save(&self, orders: &[WorkOrder]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let documents: Vec<WorkOrderDocument> =
            orders.iter().map(WorkOrderDocument::from_order).collect();
        let json = serde_json::to_string_pretty(&documents)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Load the stored collection, falling back to the seed orders anchored to
/// `today`'s month. The fallback is persisted right away so the next load
/// sees a well-formed blob.
pub fn load_or_seed(store: &dyn ScheduleStore, today: NaiveDate) -> Vec<WorkOrder> {
    if let Some(orders) = store.load() {
        return orders;
    }
    let seeded = seed::sample_work_orders(today);
    if let Err(err) = store.save(&seeded) {
        warn!("failed to persist seeded schedule: {err}");
    }
    seeded
}
