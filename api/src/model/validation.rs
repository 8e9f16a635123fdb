//! Form sanitization.
//!
//! Every form runs the same pipeline: trim each field, check the field
//! constraints declared with `garde`, then escape markup and coerce the
//! values into the shape the handler persists. All constraint failures are
//! collected; the cleaned values are produced even when some fields fail so
//! the form can be shown again with what the user typed.

use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct Sanitized<T> {
    pub value: T,
    pub errors: Vec<FieldError>,
}

impl<T> Sanitized<T> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub trait FormFields: Validate<Context = ()> + Sized {
    type Clean;

    /// Strips surrounding whitespace from every text field.
    fn trim(self) -> Self;

    /// User-facing message for every failure on `field`. `None` keeps the
    /// validator's own message.
    fn message(field: &str) -> Option<&'static str>;

    /// Escapes and coerces the trimmed fields.
    fn clean(self) -> Self::Clean;

    fn sanitize(self) -> Sanitized<Self::Clean> {
        let form = self.trim();
        let errors = match form.validate(&()) {
            Ok(()) => Vec::new(),
            Err(report) => field_errors(&report, Self::message),
        };
        Sanitized {
            value: form.clean(),
            errors,
        }
    }
}

/// Flattens a report into one entry per distinct `(field, message)`.
pub fn field_errors(
    report: &garde::Report,
    message: impl Fn(&str) -> Option<&'static str>,
) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();
    for (path, error) in report.iter() {
        let field = path.to_string();
        let text = message(&field)
            .map(str::to_owned)
            .unwrap_or_else(|| error.message().to_owned());
        if !errors.iter().any(|e| e.field == field && e.message == text) {
            errors.push(FieldError::new(field, text));
        }
    }
    errors
}

/// HTML-escapes the characters that can open markup or break out of an
/// attribute.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Accepts ISO-8601 calendar dates and date-times, keeping the date part.
///
/// Dates may be extended (`2024-05-01`), basic (`20240501`) or reduced to a
/// month or a year. A time may follow after `T` or a space, with any
/// precision from the hour down and an optional `Z` or numeric offset.
pub fn parse_iso8601_date(value: &str) -> Option<NaiveDate> {
    if !value.is_ascii() {
        return None;
    }
    let (date, time) = match value.find(['T', ' ']) {
        Some(at) => (&value[..at], Some(&value[at + 1..])),
        None => (value, None),
    };
    let date = parse_calendar_date(date)?;
    match time {
        Some(time) if !is_iso8601_time(time) => None,
        _ => Some(date),
    }
}

fn digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    let dash = |at: usize| date.as_bytes().get(at) == Some(&b'-');
    let (year, month, day) = match date.len() {
        10 if dash(4) && dash(7) => (&date[..4], &date[5..7], &date[8..]),
        8 => (&date[..4], &date[4..6], &date[6..]),
        7 if dash(4) => (&date[..4], &date[5..], "01"),
        4 => (date, "01", "01"),
        _ => return None,
    };
    let year = i32::try_from(digits(year)?).ok()?;
    NaiveDate::from_ymd_opt(year, digits(month)?, digits(day)?)
}

fn is_iso8601_time(time: &str) -> bool {
    let Some(clock) = strip_utc_offset(time) else {
        return false;
    };
    if clock.len() == 2 {
        return digits(clock).is_some_and(|hour| hour < 24);
    }
    ["%H:%M", "%H:%M:%S%.f", "%H%M", "%H%M%S%.f"]
        .iter()
        .any(|format| NaiveTime::parse_from_str(clock, format).is_ok())
}

/// The clock part of `time` once a trailing `Z`, `±hh`, `±hhmm` or
/// `±hh:mm` is removed. `None` when the offset is malformed.
fn strip_utc_offset(time: &str) -> Option<&str> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Some(clock);
    }
    let Some(at) = time.rfind(['+', '-']) else {
        return Some(time);
    };
    let offset = &time[at + 1..];
    let (hours, minutes) = match offset.len() {
        2 => (offset, "00"),
        4 => offset.split_at(2),
        5 if offset.as_bytes()[2] == b':' => (&offset[..2], &offset[3..]),
        _ => return None,
    };
    let valid = digits(hours).is_some_and(|h| h < 24) && digits(minutes).is_some_and(|m| m < 60);
    valid.then(|| &time[..at])
}

/// Empty means "not given"; anything else must be an ISO-8601 date.
pub fn optional_iso8601(value: &str, _: &()) -> garde::Result {
    if value.is_empty() || parse_iso8601_date(value).is_some() {
        Ok(())
    } else {
        Err(garde::Error::new("not an ISO-8601 date"))
    }
}
