use polguard_types::{ReportRow, SecureStatus};

/// Console text sink.
///
/// Every label in `groups` opens a `=== Scanning <label> ===` header in order, followed by the
/// leading rows that carry that label; a group with no documents still prints its header.
/// Rows left over once `groups` is exhausted get a header whenever their label changes.
pub fn render_text(groups: &[&str], rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let mut rest = rows;

    for label in groups {
        push_header(&mut out, label);
        let run = rest.iter().take_while(|row| row.group == *label).count();
        for row in &rest[..run] {
            push_row(&mut out, row);
        }
        rest = &rest[run..];
    }

    let mut current_group: Option<&str> = None;
    for row in rest {
        if current_group != Some(row.group.as_str()) {
            push_header(&mut out, &row.group);
            current_group = Some(row.group.as_str());
        }
        push_row(&mut out, row);
    }

    out
}

fn push_header(out: &mut String, label: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("=== Scanning {label} ===\n"));
}

fn push_row(out: &mut String, row: &ReportRow) {
    if row.is_secure == SecureStatus::Error {
        let cause = row.error.as_deref().unwrap_or("unknown error");
        out.push_str(&format!(
            "\n[{}] - Risk: {}\n  Error reading {}: {}\n",
            row.filename,
            row.risk_label(),
            row.filename,
            cause
        ));
        return;
    }

    out.push_str(&format!(
        "\n[{}] - Risk: {}\n",
        row.filename,
        row.risk_label()
    ));
    if row.findings.is_empty() {
        out.push_str("  No issues found.\n");
    } else {
        for f in &row.findings {
            out.push_str(&format!("  - {}\n", f.message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{clean_row, error_row, risky_row};

    #[test]
    fn renders_nothing_for_empty_rows() {
        assert_eq!(render_text(&[], &[]), "");
    }

    #[test]
    fn renders_grouped_rows() {
        let rows = vec![
            risky_row(
                "full_admin.json",
                "test_policies",
                &[
                    "Unrestricted action: '*'",
                    "Unrestricted resource: '*'",
                    "FULL access (Allow '*' on '*' with no condition)",
                ],
            ),
            error_row("broken.json", "test_policies", "expected value at line 1 column 1"),
            clean_row("scoped_read.json", "secure_policies"),
        ];

        let groups = ["test_policies", "staging", "secure_policies"];
        insta::assert_snapshot!(render_text(&groups, &rows), @r"
=== Scanning test_policies ===

[full_admin.json] - Risk: High
  - Unrestricted action: '*'
  - Unrestricted resource: '*'
  - FULL access (Allow '*' on '*' with no condition)

[broken.json] - Risk: N/A
  Error reading broken.json: expected value at line 1 column 1

=== Scanning staging ===

=== Scanning secure_policies ===

[scoped_read.json] - Risk: None
  No issues found.
");
    }

    #[test]
    fn repeated_group_label_reopens_header_when_interleaved() {
        let rows = vec![
            clean_row("a.json", "left"),
            clean_row("b.json", "right"),
            clean_row("c.json", "left"),
        ];
        let text = render_text(&[], &rows);
        assert_eq!(text.matches("=== Scanning left ===").count(), 2);
        assert_eq!(text.matches("=== Scanning right ===").count(), 1);
    }

    #[test]
    fn empty_groups_keep_their_headers() {
        let text = render_text(&["empty", "other_empty"], &[]);
        assert_eq!(text, "=== Scanning empty ===\n\n=== Scanning other_empty ===\n");
    }

    #[test]
    fn rows_outside_the_listed_groups_still_render() {
        let rows = vec![clean_row("a.json", "known"), clean_row("b.json", "extra")];
        let text = render_text(&["known"], &rows);
        assert_eq!(
            text,
            "=== Scanning known ===\n\n[a.json] - Risk: None\n  No issues found.\n\n\
             === Scanning extra ===\n\n[b.json] - Risk: None\n  No issues found.\n"
        );
    }
}
