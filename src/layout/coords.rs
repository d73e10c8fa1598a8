use chrono::NaiveDate;

use crate::layout::calendar;
use crate::model::TimeWindow;

/// Horizontal pixel offset of `date` from the window's start edge.
/// Negative for dates before the window; callers clamp for rendering.
pub fn date_to_offset_px(date: NaiveDate, window: &TimeWindow, px_per_day: f32) -> f32 {
    calendar::days_between(window.start, date) as f32 * px_per_day
}

/// Clamp an offset into `[0, total_width_px]` so geometry for orders that
/// spill past either window edge stays on the visible timeline.
pub fn clamp_offset(px: f32, total_width_px: f32) -> f32 {
    px.min(total_width_px).max(0.0)
}

/// Full pixel width of the visible window.
pub fn total_width_px(window: &TimeWindow, px_per_day: f32) -> f32 {
    window.num_days() as f32 * px_per_day
}

/// Inverse mapping: the calendar day under a pixel offset, floored to the
/// containing day and never before the window start. Used for
/// click-to-create on the timeline grid.
pub fn offset_to_date(px: f32, window: &TimeWindow, px_per_day: f32) -> NaiveDate {
    let day_offset = (px / px_per_day).floor().max(0.0) as i64;
    calendar::add_days(window.start, day_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> TimeWindow {
        TimeWindow {
            start: date(2026, 2, 1),
            end: date(2026, 3, 1),
        }
    }

    #[test]
    fn offset_scales_by_px_per_day() {
        assert_eq!(date_to_offset_px(date(2026, 2, 1), &window(), 24.0), 0.0);
        assert_eq!(date_to_offset_px(date(2026, 2, 5), &window(), 24.0), 96.0);
        assert_eq!(date_to_offset_px(date(2026, 1, 30), &window(), 24.0), -48.0);
    }

    #[test]
    fn total_width_counts_window_days() {
        assert_eq!(total_width_px(&window(), 24.0), 28.0 * 24.0);
        assert_eq!(total_width_px(&window(), 3.0), 84.0);
    }

    #[test]
    fn clamp_keeps_geometry_inside_the_timeline() {
        assert_eq!(clamp_offset(-48.0, 672.0), 0.0);
        assert_eq!(clamp_offset(100.0, 672.0), 100.0);
        assert_eq!(clamp_offset(9000.0, 672.0), 672.0);
    }

    #[test]
    fn offset_to_date_floors_to_the_containing_day() {
        let w = window();
        assert_eq!(offset_to_date(0.0, &w, 24.0), date(2026, 2, 1));
        assert_eq!(offset_to_date(23.9, &w, 24.0), date(2026, 2, 1));
        assert_eq!(offset_to_date(24.0, &w, 24.0), date(2026, 2, 2));
        // Negative offsets snap to the window start.
        assert_eq!(offset_to_date(-10.0, &w, 24.0), date(2026, 2, 1));
    }
}
