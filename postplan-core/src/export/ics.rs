//! ICS export.
//!
//! Emits a flat VCALENDAR with one VEVENT per record, CRLF line endings and
//! floating local DTSTART times (no timezone, no DTSTAMP, no recurrence).
//! The document is assembled line by line so the bytes stay under our
//! control; see `escape_text` for the escaping contract.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{PlanError, PlanResult};
use crate::post::{PostRecord, DEFAULT_TIME};

const PRODID: &str = "-//Realtor Planner//RU";

/// Serialize records to iCalendar bytes, in input order.
///
/// Callers wanting chronological output must pre-sort. UIDs are positional
/// (`{index}-{date}-{platform}`): unique within one export, but not stable
/// across edits or re-exports.
///
/// Fails on the first record whose `date` or `time` does not parse; nothing
/// is produced in that case, so a caller never writes a truncated file.
pub fn to_ics(records: &[PostRecord]) -> PlanResult<Vec<u8>> {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
    ];

    for (index, rec) in records.iter().enumerate() {
        let summary = escape_text(&format!("{} · {}", rec.platform, rec.title));
        let description = escape_text(&format!("{}\n\n{}", rec.body, rec.hashtags));

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}-{}-{}", index, rec.date, rec.platform));
        lines.push(format!("DTSTART:{}", dtstart(&rec.date, &rec.time)?));
        lines.push(format!("SUMMARY:{}", summary));
        lines.push(format!("DESCRIPTION:{}", description));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    Ok(lines.join("\r\n").into_bytes())
}

/// Floating local date-time, `YYYYMMDDTHHMM00`. An empty time falls back to
/// the default posting time.
fn dtstart(date: &str, time: &str) -> PlanResult<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| PlanError::InvalidDate(date.to_string()))?;

    let time_str = if time.is_empty() { DEFAULT_TIME } else { time };
    let time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| PlanError::InvalidTime(time_str.to_string()))?;

    Ok(format!(
        "{}T{}00",
        date.format("%Y%m%d"),
        time.format("%H%M")
    ))
}

/// Escape TEXT property values: newline, then comma, then semicolon.
///
/// A literal backslash is passed through unescaped; importers that insist on
/// full RFC 5545 escaping will misread such text. Known limitation.
fn escape_text(value: &str) -> String {
    value
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}
