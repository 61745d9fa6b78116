//! Use case orchestration for polguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod report;
mod scan;

pub use audit::run_audit;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_csv, render_markdown, render_text, write_text_file};
pub use report::{build_report, parse_report_json, serialize_report};
pub use scan::{ScanInput, ScanOutput, gate_exit_code, run_scan};
