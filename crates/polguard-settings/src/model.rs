use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `polguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolguardConfigV1 {
    /// Optional schema string for tooling (`polguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// File name globs selecting candidate documents (default `*.json`).
    #[serde(default)]
    pub include: Vec<String>,

    /// Exit-code gate: `never` (default), `error`, `low`, `moderate`, or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Document groups to scan, in report order.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroupConfig {
    /// Label shown in the report's folder column.
    pub label: String,

    /// Directory holding the documents. Relative paths resolve against the scan root.
    /// Defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
