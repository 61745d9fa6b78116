//! The audit orchestrator: sources in, one report row per candidate document out.

use polguard_domain::fingerprint::fingerprint_for_statement;
use polguard_domain::source::{DocumentParser, DocumentSource, RawDocument};
use polguard_domain::{classify, evaluate};
use polguard_render::VIOLATIONS_SEPARATOR;
use polguard_types::{Finding, ReportRow, SecureStatus};
use rayon::prelude::*;

/// Audit every document of every source.
///
/// Rows come back in source order, then in each source's enumeration order, regardless of how
/// evaluation was scheduled. A document that cannot be read, parsed, or evaluated becomes an
/// `Error` row. A source that cannot list its documents contributes no rows.
pub fn run_audit(sources: &[&dyn DocumentSource], parser: &dyn DocumentParser) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for source in sources {
        let label = source.label();
        let documents = match source.documents() {
            Ok(documents) => documents,
            Err(err) => {
                tracing::warn!(group = %label, error = %err, "skipping group");
                continue;
            }
        };

        tracing::info!(group = %label, documents = documents.len(), "scanning group");

        let group_rows: Vec<ReportRow> = documents
            .into_par_iter()
            .map(|doc| audit_document(label, doc, parser))
            .collect();
        rows.extend(group_rows);
    }

    rows
}

fn audit_document(group: &str, doc: RawDocument, parser: &dyn DocumentParser) -> ReportRow {
    let outcome = doc
        .bytes
        .and_then(|bytes| parser.parse(&bytes))
        .map_err(|e| e.to_string())
        .and_then(|policy| evaluate(&policy).map_err(|e| e.to_string()));

    match outcome {
        Ok(findings) => {
            tracing::debug!(group, document = %doc.id, findings = findings.len(), "evaluated");
            evaluated_row(group, doc.id, findings)
        }
        Err(cause) => {
            tracing::warn!(group, document = %doc.id, error = %cause, "document not evaluated");
            error_row(group, doc.id, cause)
        }
    }
}

fn evaluated_row(group: &str, filename: String, mut findings: Vec<Finding>) -> ReportRow {
    for f in &mut findings {
        f.fingerprint = Some(fingerprint_for_statement(
            &f.check_id,
            &f.code,
            group,
            &filename,
            f.statement,
        ));
    }

    let violations = if findings.is_empty() {
        "None".to_string()
    } else {
        findings
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(VIOLATIONS_SEPARATOR)
    };

    ReportRow {
        filename,
        group: group.to_string(),
        is_secure: if findings.is_empty() {
            SecureStatus::Yes
        } else {
            SecureStatus::No
        },
        risk_level: Some(classify(findings.len())),
        violations,
        findings,
        error: None,
    }
}

fn error_row(group: &str, filename: String, cause: String) -> ReportRow {
    ReportRow {
        filename,
        group: group.to_string(),
        is_secure: SecureStatus::Error,
        risk_level: None,
        violations: format!("Error reading file: {cause}"),
        findings: Vec::new(),
        error: Some(cause),
    }
}
