//! CSV export.
//!
//! UTF-8, comma-delimited, `\n` row terminator (including after the last
//! row). Fields containing a comma, quote or line break are quoted with
//! embedded quotes doubled, so titles and multi-line bodies round-trip
//! through any standard CSV parser.

use crate::post::PostRecord;

/// Column order of the export.
pub const CSV_HEADER: [&str; 8] = [
    "Date", "Time", "Platform", "Type", "Title", "Body", "Hashtags", "Status",
];

/// Serialize records to CSV bytes, one row per record after the header.
pub fn to_csv(records: &[PostRecord]) -> Vec<u8> {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);

    for rec in records {
        push_row(
            &mut out,
            &[
                rec.date.as_str(),
                rec.time.as_str(),
                rec.platform.as_str(),
                rec.content_type.as_str(),
                rec.title.as_str(),
                rec.body.as_str(),
                rec.hashtags.as_str(),
                rec.status.as_str(),
            ],
        );
    }

    out.into_bytes()
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
