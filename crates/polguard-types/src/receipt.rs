use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for polguard reports.
pub const SCHEMA_REPORT_V1: &str = "polguard.report.v1";

/// Coarse risk bucket derived from the number of findings in a document.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RiskLevel {
    None,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome column of a report row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SecureStatus {
    Yes,
    No,
    Error,
}

impl SecureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecureStatus::Yes => "Yes",
            SecureStatus::No => "No",
            SecureStatus::Error => "Error",
        }
    }
}

impl fmt::Display for SecureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,
    /// Human-readable tag; this exact text appears in the violations column.
    pub message: String,
    /// Zero-based index of the statement that produced the finding.
    pub statement: u32,

    /// Stable identifier intended for dedup and trending across runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// One summarized audit outcome per scanned document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRow {
    pub filename: String,
    pub group: String,
    pub is_secure: SecureStatus,
    /// Absent when the document could not be evaluated.
    pub risk_level: Option<RiskLevel>,
    /// Findings joined with `; `, `None` when clean, or the failure description.
    pub violations: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<Finding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportRow {
    /// Risk column as rendered in tabular and text sinks (`N/A` for error rows).
    pub fn risk_label(&self) -> &'static str {
        self.risk_level.map(|r| r.as_str()).unwrap_or("N/A")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskCounts {
    pub none: u32,
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditSummary {
    pub documents_scanned: u32,
    pub secure: u32,
    pub insecure: u32,
    pub errors: u32,
    pub findings_total: u32,
    pub by_risk: RiskCounts,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report envelope written by `polguard scan --json-out`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub rows: Vec<ReportRow>,
    pub summary: AuditSummary,
}

pub type PolguardReport = ReportEnvelope;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }

    #[test]
    fn error_row_renders_not_applicable_risk() {
        let row = ReportRow {
            filename: "broken.json".to_string(),
            group: "test_policies".to_string(),
            is_secure: SecureStatus::Error,
            risk_level: None,
            violations: "Error reading file: boom".to_string(),
            findings: Vec::new(),
            error: Some("boom".to_string()),
        };
        assert_eq!(row.risk_label(), "N/A");

        let value = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(value["is_secure"], json!("Error"));
        assert_eq!(value["risk_level"], json!(null));
        assert!(value.get("findings").is_none());
    }
}
