use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Complete,
    Blocked,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Complete,
        WorkOrderStatus::Blocked,
    ];

    /// Human-readable label for pickers and badges.
    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "Open",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Complete => "Complete",
            WorkOrderStatus::Blocked => "Blocked",
        }
    }
}

/// A machine, line, or team that work orders are scheduled against.
/// Centers group orders into timeline rows; they are created and destroyed
/// by the store, never by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCenter {
    pub id: String,
    pub name: String,
}

impl WorkCenter {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A scheduled span of work on a single work center.
///
/// Dates are calendar days with no time-of-day component; `end_date` is
/// compared, not enforced, to fall after `start_date` — the write path
/// rejects inverted ranges before an order is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub name: String,
    pub work_center_id: String,
    pub status: WorkOrderStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WorkOrder {
    /// Create a new order with a fresh `wo-` prefixed id.
    pub fn new(
        name: impl Into<String>,
        work_center_id: impl Into<String>,
        status: WorkOrderStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: format!("wo-{}", Uuid::new_v4()),
            name: name.into(),
            work_center_id: work_center_id.into(),
            status,
            start_date,
            end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&WorkOrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: WorkOrderStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(back, WorkOrderStatus::Blocked);
    }

    #[test]
    fn new_orders_get_unique_ids() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        let a = WorkOrder::new("A", "wc1", WorkOrderStatus::Open, d, d);
        let b = WorkOrder::new("B", "wc1", WorkOrderStatus::Open, d, d);
        assert!(a.id.starts_with("wo-"));
        assert_ne!(a.id, b.id);
    }
}
