use crate::model::PolguardConfigV1;
use anyhow::Context;
use globset::Glob;
use polguard_domain::policy::FailOn;
use polguard_types::RiskLevel;

/// Groups scanned when neither the config nor the command line names any.
pub const DEFAULT_GROUPS: &[&str] = &["test_policies", "secure_policies"];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// `(label, path)` pairs; when non-empty they replace the configured groups.
    pub groups: Vec<(String, String)>,
    pub include: Vec<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub label: String,
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub groups: Vec<ResolvedGroup>,
    pub include: Vec<String>,
    pub fail_on: FailOn,
}

pub fn resolve_config(
    cfg: PolguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let groups: Vec<ResolvedGroup> = if !overrides.groups.is_empty() {
        overrides
            .groups
            .into_iter()
            .map(|(label, path)| ResolvedGroup { label, path })
            .collect()
    } else if !cfg.groups.is_empty() {
        cfg.groups
            .into_iter()
            .map(|g| ResolvedGroup {
                path: g.path.unwrap_or_else(|| g.label.clone()),
                label: g.label,
            })
            .collect()
    } else {
        DEFAULT_GROUPS
            .iter()
            .map(|name| ResolvedGroup {
                label: name.to_string(),
                path: name.to_string(),
            })
            .collect()
    };

    for group in &groups {
        if group.label.trim().is_empty() {
            anyhow::bail!("group label must not be empty (path: {})", group.path);
        }
    }

    let include = if overrides.include.is_empty() {
        cfg.include
    } else {
        overrides.include
    };
    validate_include(&include)?;

    let fail_on = match overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        Some(v) => parse_fail_on(v).context("resolve fail_on")?,
        None => FailOn::Never,
    };

    Ok(ResolvedConfig {
        groups,
        include,
        fail_on,
    })
}

fn validate_include(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid include glob: {pattern}"))?;
    }
    Ok(())
}

pub fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "error" => Ok(FailOn::Error),
        "low" => Ok(FailOn::AtLeast(RiskLevel::Low)),
        "moderate" => Ok(FailOn::AtLeast(RiskLevel::Moderate)),
        "high" => Ok(FailOn::AtLeast(RiskLevel::High)),
        other => {
            anyhow::bail!("unknown fail_on: {other} (expected never|error|low|moderate|high)")
        }
    }
}
