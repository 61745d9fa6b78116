//! Stable DTOs and IDs used across the polguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report (rows, findings, summary)
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    AuditSummary, Finding, PolguardReport, ReportEnvelope, ReportRow, RiskCounts, RiskLevel,
    SCHEMA_REPORT_V1, SecureStatus, ToolMeta,
};
