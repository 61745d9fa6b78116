use polguard_types::{ReportRow, RiskLevel, SecureStatus};

/// Exit-code gate evaluated over a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// A completed batch always succeeds.
    #[default]
    Never,
    /// Trip when any document could not be evaluated.
    Error,
    /// Trip when any document is at or above the given risk.
    AtLeast(RiskLevel),
}

impl FailOn {
    pub fn is_tripped(&self, rows: &[ReportRow]) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::Error => rows.iter().any(|r| r.is_secure == SecureStatus::Error),
            FailOn::AtLeast(threshold) => rows
                .iter()
                .any(|r| r.risk_level.is_some_and(|risk| risk >= *threshold)),
        }
    }
}
