use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::layout::calendar;

/// Zoom level of the timeline. Each mode fixes the pixel density and how
/// far the visible window reaches into the past and future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimescaleMode {
    Day,
    Week,
    Month,
}

impl TimescaleMode {
    pub const ALL: [TimescaleMode; 3] = [
        TimescaleMode::Day,
        TimescaleMode::Week,
        TimescaleMode::Month,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimescaleMode::Day => "Day",
            TimescaleMode::Week => "Week",
            TimescaleMode::Month => "Month",
        }
    }

    /// `(px_per_day, past_days, future_days)` for this zoom level.
    fn config(&self) -> (f32, i64, i64) {
        match self {
            TimescaleMode::Day => (24.0, 14, 14),
            TimescaleMode::Week => (10.0, 60, 60),
            TimescaleMode::Month => (3.0, 180, 180),
        }
    }
}

/// The contiguous date range currently rendered on the timeline.
/// Half-open: `start` is the first visible day, `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of calendar days spanned by the window.
    pub fn num_days(&self) -> i64 {
        calendar::days_between(self.start, self.end)
    }
}

/// Pixel density and visible window derived from a timescale mode.
#[derive(Debug, Clone, Copy)]
pub struct TimescaleConfig {
    pub px_per_day: f32,
    pub window: TimeWindow,
}

/// Derive the viewport for a mode around `today`. The extra day on the
/// future edge keeps `today` strictly inside the half-open window.
pub fn configure(mode: TimescaleMode, today: NaiveDate) -> TimescaleConfig {
    let (px_per_day, past_days, future_days) = mode.config();
    TimescaleConfig {
        px_per_day,
        window: TimeWindow {
            start: calendar::add_days(today, -past_days),
            end: calendar::add_days(today, future_days + 1),
        },
    }
}
