use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use postplan_core::export::{to_csv, to_ics};
use postplan_core::plan::start_of_week;
use postplan_core::post::PostRecord;

use crate::store;

pub fn run(format: &str, plan_path: &Path, out: Option<PathBuf>) -> Result<()> {
    let records = store::load_plan(plan_path)?;

    for warning in store::validation_warnings(&records) {
        eprintln!("{}", format!("warning: {}", warning).yellow());
    }

    // Serialize before touching the output path: an export error must never
    // leave a truncated file behind.
    let (bytes, ext) = match format.to_lowercase().as_str() {
        "csv" => (to_csv(&records), "csv"),
        "ics" => (to_ics(&records).context("ICS export failed")?, "ics"),
        _ => anyhow::bail!("Format '{}' not recognized. Available: csv, ics", format),
    };

    let out = out.unwrap_or_else(|| default_filename(&records, ext));
    std::fs::write(&out, &bytes)
        .with_context(|| format!("Could not write {}", out.display()))?;

    println!(
        "{}",
        format!("Exported: {} ({} posts)", out.display(), records.len()).green()
    );

    Ok(())
}

/// `content-plan-<week-start>.<ext>`, where the week start is the Monday of
/// the earliest parseable record date. A plan with no usable dates drops the
/// week suffix.
fn default_filename(records: &[PostRecord], ext: &str) -> PathBuf {
    let week = records
        .iter()
        .filter_map(|r| NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").ok())
        .min()
        .map(start_of_week);

    match week {
        Some(week) => PathBuf::from(format!("content-plan-{}.{}", week, ext)),
        None => PathBuf::from(format!("content-plan.{}", ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> PostRecord {
        PostRecord {
            date: date.to_string(),
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
    fn filename_uses_week_of_earliest_date() {
        // 2024-01-03 is a Wednesday; its week starts 2024-01-01
        let records = vec![record("2024-01-05"), record("2024-01-03")];
        assert_eq!(
            default_filename(&records, "csv"),
            PathBuf::from("content-plan-2024-01-01.csv")
        );
    }

    #[test]
    fn filename_without_parseable_dates_has_no_week() {
        let records = vec![record("когда-нибудь")];
        assert_eq!(
            default_filename(&records, "ics"),
            PathBuf::from("content-plan.ics")
        );
    }
}
