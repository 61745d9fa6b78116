//! The `explain` use case: remediation guidance for a check id or code.

use polguard_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier, with every identifier the registry does know.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    push_heading(&mut out, exp.title, '=');
    out.push_str(exp.description);
    out.push_str("\n\n");

    push_heading(&mut out, "Remediation", '-');
    out.push_str(exp.remediation);
    out.push_str("\n\n");

    push_heading(&mut out, "Examples", '-');
    push_statement(&mut out, "Flagged statement:", exp.examples.before);
    out.push('\n');
    push_statement(&mut out, "Accepted statement:", exp.examples.after);

    out
}

pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {}\n\n", identifier);

    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}

fn push_heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat_n(underline, title.chars().count()));
    out.push_str("\n\n");
}

fn push_statement(out: &mut String, caption: &str, body: &str) {
    out.push_str(caption);
    out.push_str("\n```json\n");
    out.push_str(body);
    out.push_str("\n```\n");
}
