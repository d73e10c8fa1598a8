//! Sample work centers and orders used when no stored schedule exists.
//!
//! Order seeds are anchored to the first of the month containing `today`,
//! so a fresh schedule always shows activity around the visible window.

use chrono::{Datelike, NaiveDate};

use crate::layout::calendar;
use crate::model::{WorkCenter, WorkOrder, WorkOrderStatus};

struct OrderSeed {
    id: &'static str,
    name: &'static str,
    work_center_id: &'static str,
    status: WorkOrderStatus,
    start: (i32, u32),
    end: (i32, u32),
}

const ORDER_SEEDS: [OrderSeed; 15] = [
    OrderSeed { id: "wo1", name: "Batch 24-001", work_center_id: "wc1", status: WorkOrderStatus::Complete, start: (-2, 4), end: (-2, 18) },
    OrderSeed { id: "wo2", name: "Die Setup A", work_center_id: "wc1", status: WorkOrderStatus::InProgress, start: (0, 5), end: (0, 16) },
    OrderSeed { id: "wo13", name: "Final Packaging Y", work_center_id: "wc1", status: WorkOrderStatus::Open, start: (2, 7), end: (2, 21) },
    OrderSeed { id: "wo3", name: "CNC Job #145", work_center_id: "wc2", status: WorkOrderStatus::InProgress, start: (-1, 10), end: (-1, 24) },
    OrderSeed { id: "wo4", name: "Fixture Rework", work_center_id: "wc2", status: WorkOrderStatus::Open, start: (1, 3), end: (1, 15) },
    OrderSeed { id: "wo14", name: "Advanced Machining", work_center_id: "wc2", status: WorkOrderStatus::Complete, start: (3, 9), end: (3, 23) },
    OrderSeed { id: "wo5", name: "Assembly Pack B", work_center_id: "wc3", status: WorkOrderStatus::InProgress, start: (-3, 12), end: (-3, 27) },
    OrderSeed { id: "wo9", name: "Spring Assembly", work_center_id: "wc3", status: WorkOrderStatus::Blocked, start: (0, 19), end: (1, 4) },
    OrderSeed { id: "wo15", name: "Complex Systems", work_center_id: "wc3", status: WorkOrderStatus::Open, start: (4, 6), end: (4, 20) },
    OrderSeed { id: "wo6", name: "QC Hold 001", work_center_id: "wc4", status: WorkOrderStatus::Blocked, start: (-2, 20), end: (-1, 7) },
    OrderSeed { id: "wo11", name: "Tooling Setup", work_center_id: "wc4", status: WorkOrderStatus::Open, start: (4, 2), end: (4, 18) },
    OrderSeed { id: "wo16", name: "Final Inspection", work_center_id: "wc4", status: WorkOrderStatus::InProgress, start: (5, 5), end: (5, 18) },
    OrderSeed { id: "wo7", name: "Final Packaging X", work_center_id: "wc5", status: WorkOrderStatus::Open, start: (-1, 4), end: (-1, 18) },
    OrderSeed { id: "wo12", name: "Quality Control Pass", work_center_id: "wc5", status: WorkOrderStatus::Complete, start: (1, 20), end: (2, 6) },
    OrderSeed { id: "wo17", name: "Packaging Transfer", work_center_id: "wc5", status: WorkOrderStatus::Blocked, start: (4, 11), end: (4, 25) },
];

pub fn sample_work_centers() -> Vec<WorkCenter> {
    vec![
        WorkCenter::new("wc1", "Genesis Hardware"),
        WorkCenter::new("wc2", "Rodriques Electrics"),
        WorkCenter::new("wc3", "Konsulting Inc"),
        WorkCenter::new("wc4", "McMarrow Distribution"),
        WorkCenter::new("wc5", "Spartan Manufacturing"),
    ]
}

/// Sample orders dated relative to `today`'s month. A seed date is
/// `(month_offset, day_of_month)` from that anchor.
pub fn sample_work_orders(today: NaiveDate) -> Vec<WorkOrder> {
    let anchor = calendar::first_of_month(today);
    ORDER_SEEDS
        .iter()
        .map(|seed| WorkOrder {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            work_center_id: seed.work_center_id.to_string(),
            status: seed.status,
            start_date: seed_date(anchor, seed.start),
            end_date: seed_date(anchor, seed.end),
        })
        .collect()
}

fn seed_date(anchor: NaiveDate, (month_offset, day_of_month): (i32, u32)) -> NaiveDate {
    let month = calendar::add_months(anchor, month_offset);
    month.with_day(day_of_month).unwrap_or(month)
}
