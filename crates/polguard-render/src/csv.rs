use std::borrow::Cow;

use polguard_types::ReportRow;

/// Column headers of the tabular export, in order.
pub const CSV_HEADER: [&str; 5] = ["Filename", "Folder", "Is Secure", "Risk Level", "Violations"];

/// Separator placed between finding messages in the violations column.
pub const VIOLATIONS_SEPARATOR: &str = "; ";

/// Render rows as RFC 4180 CSV with `\r\n` line endings.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER.iter().copied());

    for row in rows {
        push_record(
            &mut out,
            [
                row.filename.as_str(),
                row.group.as_str(),
                row.is_secure.as_str(),
                row.risk_label(),
                row.violations.as_str(),
            ],
        );
    }

    out
}

/// Recover the individual finding messages from a violations cell.
///
/// `None` (clean) yields an empty list. Error descriptions are returned as a single element.
pub fn split_violations(cell: &str) -> Vec<&str> {
    if cell == "None" || cell.is_empty() {
        return Vec::new();
    }
    cell.split(VIOLATIONS_SEPARATOR).collect()
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(field));
    }
    out.push_str("\r\n");
}

fn escape_field(s: &str) -> Cow<'_, str> {
    if s.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}
