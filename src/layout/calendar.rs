use chrono::{Datelike, Duration, Months, NaiveDate};

/// Signed number of calendar days from `a` to `b`. Negative when `b` is
/// before `a`; callers clamp where needed.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Calendar-correct day addition (handles month and year rollover).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Calendar-correct month addition; clamps to the last valid day of the
/// target month (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Monday of the week containing `date` (Sunday steps back six days).
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let to_monday = 1 - date.weekday().number_from_monday() as i64;
    add_days(date, to_monday)
}

/// Format a date as zero-padded `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string, returning `None` rather than failing loudly.
///
/// A component that parses to zero is rejected along with anything that does
/// not parse at all. Zero days and months never occur in real ISO dates, but
/// this also rejects the year `0000`; kept as-is since no stored date can
/// legitimately carry it.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if year == 0 || month == 0 || day == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
