use chrono::NaiveDate;

/// Countdown text as `m:ss`; minutes are not padded.
#[must_use]
pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Short calendar date, e.g. `Oct 15, 2026`.
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Weekday plus short date, e.g. `Thursday, Oct 15, 2026`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d, %Y").to_string()
}

/// Value for an `<input type="date">`.
#[must_use]
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[must_use]
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
