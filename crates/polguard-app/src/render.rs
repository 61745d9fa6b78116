//! Render use cases: console text, CSV, and Markdown from in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use polguard_types::ReportEnvelope;

/// Console text for a scan; `groups` are the scanned group labels in scan order.
pub fn render_text(report: &ReportEnvelope, groups: &[&str]) -> String {
    polguard_render::render_text(groups, &report.rows)
}

pub fn render_csv(report: &ReportEnvelope) -> String {
    polguard_render::render_csv(&report.rows)
}

pub fn render_markdown(report: &ReportEnvelope) -> String {
    polguard_render::render_markdown(&report.rows, &report.summary)
}

/// Write a rendered artifact, creating parent directories as needed.
pub fn write_text_file(path: &Utf8Path, contents: impl AsRef<[u8]>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
