//! Terminal rendering for the plan table.

use owo_colors::OwoColorize;
use postplan_core::post::{PostRecord, PostStatus};

const TITLE_WIDTH: usize = 44;

/// Render the plan as an aligned table, one row per post.
pub fn render_plan(records: &[PostRecord]) -> String {
    if records.is_empty() {
        return "   No posts in plan".dimmed().to_string();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        format!(
            "{} {} {} {} {} {}",
            pad("Date", 10),
            pad("Time", 5),
            pad("Platform", 9),
            pad("Type", 19),
            pad("Status", 9),
            "Title"
        )
        .dimmed()
        .to_string(),
    );

    for rec in records {
        lines.push(format!(
            "{} {} {} {} {} {}",
            pad(&rec.date, 10),
            pad(&rec.time, 5),
            pad(&rec.platform, 9),
            pad(&rec.content_type, 19),
            render_status(&rec.status),
            truncate(&rec.title, TITLE_WIDTH),
        ));
    }

    lines.join("\n")
}

/// Readiness summary: posts that moved past Draft out of the total.
pub fn readiness(records: &[PostRecord]) -> String {
    let done = records
        .iter()
        .filter(|r| r.status != PostStatus::Draft.as_str())
        .count();
    format!("Ready: {}/{}", done, records.len())
}

fn render_status(status: &str) -> String {
    let padded = pad(status, 9);
    match PostStatus::parse(status) {
        Some(PostStatus::Draft) => padded.yellow().to_string(),
        Some(PostStatus::Ready) => padded.green().to_string(),
        Some(PostStatus::Published) => padded.cyan().to_string(),
        None => padded,
    }
}

/// Pad to `width` display characters (char count, good enough for this data).
fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - len);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
