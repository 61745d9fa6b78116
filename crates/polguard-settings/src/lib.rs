//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{GroupConfig, PolguardConfigV1};
pub use resolve::{DEFAULT_GROUPS, Overrides, ResolvedConfig, ResolvedGroup, parse_fail_on};

/// Parse `polguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolguardConfigV1> {
    let cfg: PolguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings used by a scan (defaults + file + overrides).
pub fn resolve_config(
    cfg: PolguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
