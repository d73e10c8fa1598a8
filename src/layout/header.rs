//! Time-axis header cells for the visible window.
//!
//! Each mode partitions the window into labeled segments whose widths sum
//! exactly to the timeline width; boundary weeks and months are clipped to
//! the window rather than dropped.

use chrono::{Datelike, NaiveDate};

use crate::layout::{calendar, coords};
use crate::model::{TimeWindow, TimescaleMode};

/// One labeled header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSegment {
    /// ISO date of the segment's (unclipped) anchor; stable across rebuilds.
    pub key: String,
    pub label: String,
    pub width_px: f32,
    /// Whether this segment contains the marker date.
    pub is_current: bool,
}

/// Build the chronological header row for `mode`. The marker date is
/// "today" clamped into the window by the caller.
pub fn build_header_segments(
    mode: TimescaleMode,
    window: &TimeWindow,
    px_per_day: f32,
    marker: NaiveDate,
) -> Vec<HeaderSegment> {
    match mode {
        TimescaleMode::Day => build_day_headers(window, px_per_day, marker),
        TimescaleMode::Week => build_week_headers(window, px_per_day, marker),
        TimescaleMode::Month => build_month_headers(window, px_per_day, marker),
    }
}

/// `"Feb 4"` style label.
fn month_day_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

fn build_day_headers(window: &TimeWindow, px_per_day: f32, marker: NaiveDate) -> Vec<HeaderSegment> {
    (0..window.num_days())
        .map(|offset| {
            let date = calendar::add_days(window.start, offset);
            // Month name on the first of a month and on the window's first
            // cell; bare day number everywhere else.
            let label = if date.day() == 1 || offset == 0 {
                month_day_label(date)
            } else {
                date.day().to_string()
            };
            HeaderSegment {
                key: calendar::to_iso(date),
                label,
                width_px: px_per_day,
                is_current: date == marker,
            }
        })
        .collect()
}

fn build_week_headers(
    window: &TimeWindow,
    px_per_day: f32,
    marker: NaiveDate,
) -> Vec<HeaderSegment> {
    let mut segments = Vec::new();
    let mut cursor = calendar::start_of_week(window.start);
    while cursor < window.end {
        let next = calendar::add_days(cursor, 7);
        let clip_start = cursor.max(window.start);
        let clip_end = next.min(window.end);
        let width_days = calendar::days_between(clip_start, clip_end);
        if width_days > 0 {
            let label = if width_days < 7 {
                month_day_label(cursor)
            } else {
                format!("Wk {}", month_day_label(cursor))
            };
            segments.push(HeaderSegment {
                key: calendar::to_iso(cursor),
                label,
                width_px: width_days as f32 * px_per_day,
                is_current: marker >= clip_start && marker < clip_end,
            });
        }
        cursor = next;
    }
    segments
}

fn build_month_headers(
    window: &TimeWindow,
    px_per_day: f32,
    marker: NaiveDate,
) -> Vec<HeaderSegment> {
    let mut segments = Vec::new();
    let mut cursor = calendar::first_of_month(window.start);
    while cursor < window.end {
        let next = calendar::add_months(cursor, 1);
        let clip_start = cursor.max(window.start);
        let clip_end = next.min(window.end);
        let width_days = calendar::days_between(clip_start, clip_end);
        if width_days > 0 {
            segments.push(HeaderSegment {
                key: calendar::to_iso(cursor),
                label: cursor.format("%b %Y").to_string(),
                width_px: width_days as f32 * px_per_day,
                is_current: cursor.year() == marker.year() && cursor.month() == marker.month(),
            });
        }
        cursor = next;
    }
    segments
}

/// Pixel offsets for vertical separators at month boundaries strictly
/// inside the window. Drawn as an overlay regardless of the active mode.
pub fn month_separators(window: &TimeWindow, px_per_day: f32) -> Vec<f32> {
    let mut separators = Vec::new();
    let mut cursor = calendar::first_of_month(window.start);
    while cursor < window.end {
        let next = calendar::add_months(cursor, 1);
        if next > window.start && next < window.end {
            separators.push(coords::date_to_offset_px(next, window, px_per_day));
        }
        cursor = next;
    }
    separators
}
