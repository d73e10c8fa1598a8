//! In-memory schedule state and its derived timeline geometry.
//!
//! [`Schedule`] owns a snapshot of the work center and work order
//! collections and rebuilds header segments and per-center lane layouts
//! wholesale whenever the collections or the timescale change. All derived
//! state is a pure function of the snapshot; persistence stays with the
//! caller through the [`crate::io::ScheduleStore`] contract.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use crate::layout::lanes::ROW_MIN_HEIGHT_PX;
use crate::layout::{self, calendar, coords, CenterLayout, HeaderSegment, OrderLayout};
use crate::model::{self, TimeWindow, TimescaleMode, WorkCenter, WorkOrder, WorkOrderStatus};

/// Marker shown when "today" scrolls outside the visible window.
fn fallback_marker_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 10).unwrap_or_default()
}

/// A rejected write. `Display` carries the user-facing message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid start and end dates.")]
    InvalidDates,
    #[error("End date must be after start date.")]
    EndNotAfterStart,
    #[error("This work order overlaps with an existing order on the same work center.")]
    Overlap,
    #[error("No work order with id `{0}` exists.")]
    UnknownOrder(String),
}

/// Form-level input for creating or editing an order. Dates arrive as ISO
/// strings exactly as a date field produces them; validation parses them.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub name: String,
    pub status: WorkOrderStatus,
    pub start_date: String,
    pub end_date: String,
}

/// Whether a candidate range conflicts with any existing order on the same
/// work center. The comparison is inclusive on both ends: an order ending
/// the day another starts is a conflict, not a valid hand-off.
pub fn has_overlap(
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
    work_center_id: &str,
    exclude_order_id: Option<&str>,
    orders: &[WorkOrder],
) -> bool {
    orders.iter().any(|order| {
        if order.work_center_id != work_center_id {
            return false;
        }
        if exclude_order_id == Some(order.id.as_str()) {
            return false;
        }
        candidate_start <= order.end_date && candidate_end >= order.start_date
    })
}

/// Snapshot of the schedule plus its derived timeline geometry.
pub struct Schedule {
    work_centers: Vec<WorkCenter>,
    work_orders: Vec<WorkOrder>,
    mode: TimescaleMode,
    px_per_day: f32,
    window: TimeWindow,
    header_segments: Vec<HeaderSegment>,
    layouts_by_center: HashMap<String, CenterLayout>,
}

impl Schedule {
    pub fn new(
        work_centers: Vec<WorkCenter>,
        work_orders: Vec<WorkOrder>,
        mode: TimescaleMode,
        today: NaiveDate,
    ) -> Self {
        let config = model::configure(mode, today);
        let mut schedule = Self {
            work_centers,
            work_orders,
            mode,
            px_per_day: config.px_per_day,
            window: config.window,
            header_segments: Vec::new(),
            layouts_by_center: HashMap::new(),
        };
        schedule.rebuild_header_segments(today);
        schedule.rebuild_layouts();
        schedule
    }

    pub fn work_centers(&self) -> &[WorkCenter] {
        &self.work_centers
    }

    pub fn orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    pub fn mode(&self) -> TimescaleMode {
        self.mode
    }

    pub fn px_per_day(&self) -> f32 {
        self.px_per_day
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn header_segments(&self) -> &[HeaderSegment] {
        &self.header_segments
    }

    pub fn total_width_px(&self) -> f32 {
        coords::total_width_px(&self.window, self.px_per_day)
    }

    /// Mode-independent month boundary overlay offsets.
    pub fn month_separators(&self) -> Vec<f32> {
        layout::month_separators(&self.window, self.px_per_day)
    }

    /// Lane layouts for one work center; a center with no computed layout
    /// yields an empty list rather than an error.
    pub fn layouts_for_center(&self, center_id: &str) -> &[OrderLayout] {
        self.layouts_by_center
            .get(center_id)
            .map(|layout| layout.layouts.as_slice())
            .unwrap_or(&[])
    }

    /// Row height for one work center, defaulting to the minimum height.
    pub fn row_height(&self, center_id: &str) -> f32 {
        self.layouts_by_center
            .get(center_id)
            .map(|layout| layout.row_height_px)
            .unwrap_or(ROW_MIN_HEIGHT_PX)
    }

    /// The date driving the "current day" indicator: `today` when visible,
    /// otherwise a fixed fallback.
    pub fn marker_date(&self, today: NaiveDate) -> NaiveDate {
        if self.window.contains(today) {
            today
        } else {
            fallback_marker_date()
        }
    }

    /// Offset of the current-day indicator, clamped like any other bar.
    pub fn current_day_offset_px(&self, today: NaiveDate) -> f32 {
        let offset = coords::date_to_offset_px(self.marker_date(today), &self.window, self.px_per_day);
        coords::clamp_offset(offset, self.total_width_px())
    }

    /// The calendar day under a pixel offset; used for click-to-create.
    pub fn date_at_offset(&self, px: f32) -> NaiveDate {
        coords::offset_to_date(px, &self.window, self.px_per_day)
    }

    /// Switch zoom level: re-derive pixel density and window, then rebuild
    /// all derived geometry.
    pub fn change_timescale(&mut self, mode: TimescaleMode, today: NaiveDate) {
        let config = model::configure(mode, today);
        self.mode = mode;
        self.px_per_day = config.px_per_day;
        self.window = config.window;
        self.rebuild_header_segments(today);
        self.rebuild_layouts();
    }

    /// Validate and append a new order, returning its generated id. On any
    /// validation failure the collection is left untouched and the error
    /// carries the user-facing message.
    pub fn create_order(
        &mut self,
        work_center_id: &str,
        draft: &OrderDraft,
    ) -> Result<String, ValidationError> {
        let (start_date, end_date) = self.validate_draft(draft, work_center_id, None)?;
        let order = WorkOrder::new(
            draft.name.trim(),
            work_center_id,
            draft.status,
            start_date,
            end_date,
        );
        let id = order.id.clone();
        self.work_orders.push(order);
        self.rebuild_layouts();
        Ok(id)
    }

    /// Validate and apply an in-place edit. The order keeps its work
    /// center; its own current range is excluded from the overlap check.
    pub fn update_order(&mut self, order_id: &str, draft: &OrderDraft) -> Result<(), ValidationError> {
        let center_id = self
            .work_orders
            .iter()
            .find(|order| order.id == order_id)
            .map(|order| order.work_center_id.clone())
            .ok_or_else(|| ValidationError::UnknownOrder(order_id.to_string()))?;

        let (start_date, end_date) = self.validate_draft(draft, &center_id, Some(order_id))?;

        if let Some(order) = self.work_orders.iter_mut().find(|order| order.id == order_id) {
            order.name = draft.name.trim().to_string();
            order.status = draft.status;
            order.start_date = start_date;
            order.end_date = end_date;
        }
        self.rebuild_layouts();
        Ok(())
    }

    pub fn delete_order(&mut self, order_id: &str) -> Result<(), ValidationError> {
        let before = self.work_orders.len();
        self.work_orders.retain(|order| order.id != order_id);
        if self.work_orders.len() == before {
            return Err(ValidationError::UnknownOrder(order_id.to_string()));
        }
        self.rebuild_layouts();
        Ok(())
    }

    /// Parse both dates, check range direction, then check for conflicts
    /// on the target work center; first failure wins.
    fn validate_draft(
        &self,
        draft: &OrderDraft,
        work_center_id: &str,
        exclude_order_id: Option<&str>,
    ) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        let start_date =
            calendar::parse_iso(&draft.start_date).ok_or(ValidationError::InvalidDates)?;
        let end_date = calendar::parse_iso(&draft.end_date).ok_or(ValidationError::InvalidDates)?;
        if end_date <= start_date {
            return Err(ValidationError::EndNotAfterStart);
        }
        if has_overlap(
            start_date,
            end_date,
            work_center_id,
            exclude_order_id,
            &self.work_orders,
        ) {
            return Err(ValidationError::Overlap);
        }
        Ok((start_date, end_date))
    }

    fn rebuild_header_segments(&mut self, today: NaiveDate) {
        let marker = self.marker_date(today);
        self.header_segments =
            layout::build_header_segments(self.mode, &self.window, self.px_per_day, marker);
        debug!(
            "rebuilt {} header segments for {:?} window {}..{}",
            self.header_segments.len(),
            self.mode,
            self.window.start,
            self.window.end,
        );
    }

    fn rebuild_layouts(&mut self) {
        self.layouts_by_center.clear();
        for center in &self.work_centers {
            let orders: Vec<WorkOrder> = self
                .work_orders
                .iter()
                .filter(|order| order.work_center_id == center.id)
                .cloned()
                .collect();
            self.layouts_by_center.insert(
                center.id.clone(),
                layout::layout_center(&orders, &self.window, self.px_per_day),
            );
        }
        debug!(
            "laid out {} orders across {} work centers",
            self.work_orders.len(),
            self.work_centers.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn centers() -> Vec<WorkCenter> {
        vec![
            WorkCenter::new("wc1", "Genesis Hardware"),
            WorkCenter::new("wc2", "Rodriques Electrics"),
        ]
    }

    fn order(id: &str, center: &str, start: NaiveDate, end: NaiveDate) -> WorkOrder {
        WorkOrder {
            id: id.into(),
            name: id.into(),
            work_center_id: center.into(),
            status: WorkOrderStatus::Open,
            start_date: start,
            end_date: end,
        }
    }

    fn draft(start: &str, end: &str) -> OrderDraft {
        OrderDraft {
            name: "New order".into(),
            status: WorkOrderStatus::Open,
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    fn schedule() -> Schedule {
        Schedule::new(
            centers(),
            vec![order("wo1", "wc1", date(2026, 2, 4), date(2026, 2, 18))],
            TimescaleMode::Month,
            date(2026, 2, 18),
        )
    }

    #[test]
    fn same_day_adjacency_counts_as_conflict() {
        let orders = [order("wo1", "wc1", date(2026, 2, 4), date(2026, 2, 18))];
        assert!(has_overlap(
            date(2026, 2, 18),
            date(2026, 2, 25),
            "wc1",
            None,
            &orders
        ));
        assert!(!has_overlap(
            date(2026, 2, 19),
            date(2026, 2, 25),
            "wc1",
            None,
            &orders
        ));
    }

    #[test]
    fn overlap_ignores_other_centers_and_the_excluded_order() {
        let orders = [order("wo1", "wc1", date(2026, 2, 4), date(2026, 2, 18))];
        assert!(!has_overlap(
            date(2026, 2, 10),
            date(2026, 2, 12),
            "wc2",
            None,
            &orders
        ));
        assert!(!has_overlap(
            date(2026, 2, 10),
            date(2026, 2, 12),
            "wc1",
            Some("wo1"),
            &orders
        ));
    }

    #[test]
    fn overlap_is_symmetric_in_candidate_and_existing_roles() {
        let ranges = [
            (date(2026, 2, 4), date(2026, 2, 18)),
            (date(2026, 2, 18), date(2026, 2, 25)),
            (date(2026, 2, 19), date(2026, 2, 25)),
            (date(2026, 1, 1), date(2026, 3, 1)),
        ];
        for (a_start, a_end) in ranges {
            for (b_start, b_end) in ranges {
                let a_vs_b = has_overlap(
                    a_start,
                    a_end,
                    "wc1",
                    None,
                    &[order("x", "wc1", b_start, b_end)],
                );
                let b_vs_a = has_overlap(
                    b_start,
                    b_end,
                    "wc1",
                    None,
                    &[order("x", "wc1", a_start, a_end)],
                );
                assert_eq!(a_vs_b, b_vs_a);
            }
        }
    }

    #[test]
    fn create_rejects_inverted_range_with_exact_message() {
        let mut schedule = schedule();
        let before = schedule.orders().len();
        let err = schedule
            .create_order("wc2", &draft("2026-03-10", "2026-03-10"))
            .unwrap_err();
        assert_eq!(err, ValidationError::EndNotAfterStart);
        assert_eq!(err.to_string(), "End date must be after start date.");
        assert_eq!(schedule.orders().len(), before);
    }

    #[test]
    fn create_rejects_unparseable_dates_with_exact_message() {
        let mut schedule = schedule();
        let err = schedule
            .create_order("wc2", &draft("2026-00-10", "2026-03-10"))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDates);
        assert_eq!(err.to_string(), "Please enter valid start and end dates.");
        assert_eq!(schedule.orders().len(), 1);
    }

    #[test]
    fn create_rejects_conflicts_and_leaves_state_untouched() {
        let mut schedule = schedule();
        let err = schedule
            .create_order("wc1", &draft("2026-02-18", "2026-02-25"))
            .unwrap_err();
        assert_eq!(err, ValidationError::Overlap);
        assert_eq!(
            err.to_string(),
            "This work order overlaps with an existing order on the same work center."
        );
        assert_eq!(schedule.orders().len(), 1);
    }

    #[test]
    fn create_appends_and_relayouts_on_success() {
        let mut schedule = schedule();
        let id = schedule
            .create_order("wc1", &draft("2026-02-19", "2026-02-25"))
            .unwrap();
        assert_eq!(schedule.orders().len(), 2);
        assert!(schedule
            .layouts_for_center("wc1")
            .iter()
            .any(|layout| layout.order_id == id));
    }

    #[test]
    fn update_excludes_the_edited_order_from_its_own_overlap_check() {
        let mut schedule = schedule();
        // Shift wo1 by a day inside its own current range.
        schedule
            .update_order("wo1", &draft("2026-02-05", "2026-02-18"))
            .unwrap();
        assert_eq!(schedule.orders()[0].start_date, date(2026, 2, 5));
    }

    #[test]
    fn update_and_delete_surface_unknown_ids() {
        let mut schedule = schedule();
        assert_eq!(
            schedule.update_order("nope", &draft("2026-02-05", "2026-02-18")),
            Err(ValidationError::UnknownOrder("nope".into()))
        );
        assert_eq!(
            schedule.delete_order("nope"),
            Err(ValidationError::UnknownOrder("nope".into()))
        );
    }

    #[test]
    fn delete_removes_the_order_and_its_bar() {
        let mut schedule = schedule();
        schedule.delete_order("wo1").unwrap();
        assert!(schedule.orders().is_empty());
        assert!(schedule.layouts_for_center("wc1").is_empty());
        assert_eq!(schedule.row_height("wc1"), ROW_MIN_HEIGHT_PX);
    }

    #[test]
    fn changing_timescale_resets_density_and_window() {
        let today = date(2026, 2, 18);
        let mut schedule = Schedule::new(centers(), Vec::new(), TimescaleMode::Day, today);
        assert_eq!(schedule.px_per_day(), 24.0);

        schedule.change_timescale(TimescaleMode::Week, today);
        assert_eq!(schedule.px_per_day(), 10.0);
        assert_eq!(schedule.window().num_days(), 121);
        assert!(schedule.window().contains(today));
        assert_eq!(schedule.total_width_px(), 1210.0);

        let sum: f32 = schedule.header_segments().iter().map(|s| s.width_px).sum();
        assert_eq!(sum, schedule.total_width_px());
    }

    #[test]
    fn marker_falls_back_when_today_leaves_the_window() {
        let schedule = Schedule::new(centers(), Vec::new(), TimescaleMode::Day, date(2026, 2, 18));
        assert_eq!(schedule.marker_date(date(2026, 2, 18)), date(2026, 2, 18));

        // A "today" outside the configured window falls back to the fixed
        // marker, whose offset clamps to the left edge here.
        assert_eq!(schedule.marker_date(date(2027, 1, 1)), date(2024, 9, 10));
        assert_eq!(schedule.current_day_offset_px(date(2027, 1, 1)), 0.0);
    }

    #[test]
    fn unknown_center_yields_empty_layout_and_default_height() {
        let schedule = schedule();
        assert!(schedule.layouts_for_center("wc99").is_empty());
        assert_eq!(schedule.row_height("wc99"), ROW_MIN_HEIGHT_PX);
    }

    #[test]
    fn click_position_maps_back_to_a_calendar_day() {
        let schedule = Schedule::new(centers(), Vec::new(), TimescaleMode::Day, date(2026, 2, 18));
        let start = schedule.window().start;
        assert_eq!(schedule.date_at_offset(0.0), start);
        assert_eq!(schedule.date_at_offset(24.0 * 3.0 + 1.0), date(2026, 2, 7));
    }
}
