//! Plan file persistence and boundary validation.
//!
//! The plan file is a pretty-printed JSON array of records; it stands in for
//! the editable grid, so anything in it is accepted as-is. Validation only
//! produces warnings, never rejects a plan.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use postplan_core::post::{ContentType, Platform, PostRecord, PostStatus};

pub fn load_plan(path: &Path) -> Result<Vec<PostRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read plan file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Could not parse plan file {}", path.display()))
}

pub fn save_plan(path: &Path, records: &[PostRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Could not write plan file {}", path.display()))?;
    Ok(())
}

/// Collect warnings for values outside the known sets or unparseable
/// date/time fields. Out-of-set platform/type lose their hashtag
/// contribution on regeneration, and bad date/time will fail ICS export.
pub fn validation_warnings(records: &[PostRecord]) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        if Platform::parse(&rec.platform).is_none() {
            warnings.push(format!("row {}: unknown platform '{}'", row, rec.platform));
        }
        if ContentType::parse(&rec.content_type).is_none() {
            warnings.push(format!("row {}: unknown type '{}'", row, rec.content_type));
        }
        if PostStatus::parse(&rec.status).is_none() {
            warnings.push(format!("row {}: unknown status '{}'", row, rec.status));
        }
        if NaiveDate::parse_from_str(&rec.date, "%Y-%m-%d").is_err() {
            warnings.push(format!("row {}: invalid date '{}'", row, rec.date));
        }
        if !rec.time.is_empty() && NaiveTime::parse_from_str(&rec.time, "%H:%M").is_err() {
            warnings.push(format!("row {}: invalid time '{}'", row, rec.time));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PostRecord {
        PostRecord {
            date: "2024-01-01".to_string(),
            time: "09:00".to_string(),
            platform: "VK".to_string(),
            content_type: "Advice".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            hashtags: "#x".to_string(),
            status: "Draft".to_string(),
        }
    }

    #[test]
    fn clean_records_produce_no_warnings() {
        assert!(validation_warnings(&[record()]).is_empty());
    }

    #[test]
    fn out_of_set_values_warn_but_do_not_fail() {
        let mut rec = record();
        rec.platform = "Twitter".to_string();
        rec.status = "Scheduled".to_string();
        rec.time = "9 utra".to_string();

        let warnings = validation_warnings(&[rec]);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("unknown platform 'Twitter'"));
        assert!(warnings[1].contains("unknown status 'Scheduled'"));
        assert!(warnings[2].contains("invalid time '9 utra'"));
    }

    #[test]
    fn empty_time_is_accepted() {
        let mut rec = record();
        rec.time = String::new();
        assert!(validation_warnings(&[rec]).is_empty());
    }
}
