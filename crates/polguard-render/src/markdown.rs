use polguard_types::{AuditSummary, ReportRow};

pub fn render_markdown(rows: &[ReportRow], summary: &AuditSummary) -> String {
    let mut out = String::new();

    out.push_str("# Polguard report\n\n");
    out.push_str(&format!(
        "- Documents: {} (secure {}, insecure {}, errors {})\n- Findings: {}\n- Risk: {} high / {} moderate / {} low / {} none\n\n",
        summary.documents_scanned,
        summary.secure,
        summary.insecure,
        summary.errors,
        summary.findings_total,
        summary.by_risk.high,
        summary.by_risk.moderate,
        summary.by_risk.low,
        summary.by_risk.none,
    ));

    if rows.is_empty() {
        out.push_str("No documents scanned.\n");
        return out;
    }

    out.push_str("| File | Folder | Secure | Risk | Violations |\n");
    out.push_str("|---|---|---|---|---|\n");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            cell(&row.filename),
            cell(&row.group),
            row.is_secure,
            row.risk_label(),
            cell(&row.violations)
        ));
    }

    out
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
