//! Greedy interval partitioning of a work center's orders into lanes.
//!
//! Orders are sorted by start date and assigned first-fit against the
//! rightmost occupied pixel of each existing lane, which yields the minimum
//! lane count for interval graphs. The boundary check runs in pixel space,
//! so the minimum bar width participates in collision decisions exactly as
//! bars collide on screen.

use crate::layout::{calendar, coords};
use crate::model::{TimeWindow, WorkOrder};

pub const ROW_PADDING_PX: f32 = 9.0;
pub const ROW_GAP_PX: f32 = 4.0;
pub const BAR_HEIGHT_PX: f32 = 30.0;
pub const BAR_MIN_WIDTH_PX: f32 = 56.0;
pub const ROW_MIN_HEIGHT_PX: f32 = 48.0;

/// Resolved geometry for one order bar.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLayout {
    pub order_id: String,
    pub left_px: f32,
    pub width_px: f32,
    pub lane: usize,
}

/// Layout of a whole work center row.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterLayout {
    pub layouts: Vec<OrderLayout>,
    pub lanes: usize,
    pub row_height_px: f32,
}

impl Default for CenterLayout {
    fn default() -> Self {
        Self {
            layouts: Vec::new(),
            lanes: 1,
            row_height_px: ROW_MIN_HEIGHT_PX,
        }
    }
}

/// Horizontal geometry of an order bar: left edge clamped into the
/// timeline, width floored so single-day orders stay clickable.
pub fn bar_position(order: &WorkOrder, window: &TimeWindow, px_per_day: f32) -> (f32, f32) {
    let total = coords::total_width_px(window, px_per_day);
    let left_px = coords::clamp_offset(
        coords::date_to_offset_px(order.start_date, window, px_per_day),
        total,
    );
    let day_span = calendar::days_between(order.start_date, order.end_date);
    let width_px = (day_span as f32 * px_per_day).max(BAR_MIN_WIDTH_PX);
    (left_px, width_px)
}

/// Vertical offset of a bar within its row.
pub fn bar_top_px(lane: usize) -> f32 {
    ROW_PADDING_PX + lane as f32 * (BAR_HEIGHT_PX + ROW_GAP_PX)
}

/// Whether a bar is wide enough to carry its status badge inline.
pub fn show_status_badge(width_px: f32) -> bool {
    width_px >= 140.0
}

/// Pack one work center's orders into lanes.
///
/// Sort is stable, so orders sharing a start date keep their input order
/// and the whole assignment is reproducible for a fixed input.
pub fn layout_center(orders: &[WorkOrder], window: &TimeWindow, px_per_day: f32) -> CenterLayout {
    let mut sorted: Vec<&WorkOrder> = orders.iter().collect();
    sorted.sort_by_key(|order| order.start_date);

    let mut lane_right_px: Vec<f32> = Vec::new();
    let mut layouts = Vec::with_capacity(sorted.len());

    for order in sorted {
        let (left_px, width_px) = bar_position(order, window, px_per_day);
        let right_px = left_px + width_px;
        // First lane already vacated by the time this bar starts, else a
        // new one.
        let lane = match lane_right_px.iter().position(|&right| left_px >= right) {
            Some(lane) => {
                lane_right_px[lane] = right_px;
                lane
            }
            None => {
                lane_right_px.push(right_px);
                lane_right_px.len() - 1
            }
        };
        layouts.push(OrderLayout {
            order_id: order.id.clone(),
            left_px,
            width_px,
            lane,
        });
    }

    let lanes = lane_right_px.len().max(1);
    let stacked =
        ROW_PADDING_PX * 2.0 + lanes as f32 * BAR_HEIGHT_PX + (lanes as f32 - 1.0) * ROW_GAP_PX;
    CenterLayout {
        layouts,
        lanes,
        row_height_px: stacked.max(ROW_MIN_HEIGHT_PX),
    }
}
