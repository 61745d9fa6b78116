//! The `scan` use case: resolve configuration, audit every group, build the report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use polguard_domain::policy::FailOn;
use polguard_domain::source::DocumentSource;
use polguard_repo::{DirectorySource, JsonPolicyParser, build_include_set};
use polguard_settings::{Overrides, PolguardConfigV1, ResolvedConfig};
use polguard_types::ReportEnvelope;
use time::OffsetDateTime;

use crate::audit::run_audit;
use crate::report::build_report;

#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Directory that relative group paths are resolved against.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: ReportEnvelope,
    pub resolved_config: ResolvedConfig,
}

pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        PolguardConfigV1::default()
    } else {
        polguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        polguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let include = build_include_set(&resolved.include).context("build include set")?;

    let mut sources = Vec::with_capacity(resolved.groups.len());
    for group in &resolved.groups {
        let dir: Utf8PathBuf = input.root.join(&group.path);
        if !dir.is_dir() {
            anyhow::bail!("group directory not found: {} (group {})", dir, group.label);
        }
        sources.push(DirectorySource::new(&group.label, &dir, include.clone()));
    }
    let sources: Vec<&dyn DocumentSource> =
        sources.iter().map(|s| s as &dyn DocumentSource).collect();

    let rows = run_audit(&sources, &JsonPolicyParser);
    let finished_at = OffsetDateTime::now_utc();

    tracing::info!(
        documents = rows.len(),
        elapsed_ms = (finished_at - started_at).whole_milliseconds() as i64,
        "scan finished"
    );

    Ok(ScanOutput {
        report: build_report(rows, started_at, finished_at),
        resolved_config: resolved,
    })
}

/// Process exit code for a completed scan: 2 when the gate trips, otherwise 0.
pub fn gate_exit_code(fail_on: FailOn, report: &ReportEnvelope) -> i32 {
    if fail_on.is_tripped(&report.rows) {
        2
    } else {
        0
    }
}
