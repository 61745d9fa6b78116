use anyhow::Context;
use polguard_domain::report::summarize;
use polguard_types::{ReportEnvelope, ReportRow, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Wrap a finished row set into the versioned report envelope.
pub fn build_report(
    rows: Vec<ReportRow>,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> ReportEnvelope {
    let summary = summarize(&rows);
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "polguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        rows,
        summary,
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse polguard v1 report")
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polguard_types::{Finding, RiskLevel, SecureStatus};
    use time::macros::datetime;

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                filename: "admin.json".to_string(),
                group: "test_policies".to_string(),
                is_secure: SecureStatus::No,
                risk_level: Some(RiskLevel::Low),
                violations: "Unrestricted resource: '*'".to_string(),
                findings: vec![Finding {
                    check_id: "policy.unrestricted_resource".to_string(),
                    code: "wildcard_resource".to_string(),
                    message: "Unrestricted resource: '*'".to_string(),
                    statement: 0,
                    fingerprint: Some("ab".repeat(32)),
                }],
                error: None,
            },
            ReportRow {
                filename: "broken.json".to_string(),
                group: "test_policies".to_string(),
                is_secure: SecureStatus::Error,
                risk_level: None,
                violations: "Error reading file: EOF while parsing".to_string(),
                findings: Vec::new(),
                error: Some("EOF while parsing".to_string()),
            },
        ]
    }

    #[test]
    fn build_report_fills_envelope() {
        let report = build_report(
            sample_rows(),
            datetime!(2025-01-01 00:00:00 UTC),
            datetime!(2025-01-01 00:00:01 UTC),
        );
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.tool.name, "polguard");
        assert_eq!(report.summary.documents_scanned, 2);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.findings_total, 1);
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = build_report(
            sample_rows(),
            datetime!(2025-01-01 00:00:00 UTC),
            datetime!(2025-01-01 00:00:01 UTC),
        );
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn parse_rejects_unknown_schema() {
        let err = parse_report_json(r#"{"schema":"other.v9","rows":[]}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema: other.v9"));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse_report_json("not json").unwrap_err();
        assert!(err.to_string().contains("parse report json"));
    }
}
