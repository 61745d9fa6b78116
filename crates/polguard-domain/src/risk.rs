use polguard_types::RiskLevel;

const LEVELS: [RiskLevel; 4] = [
    RiskLevel::None,
    RiskLevel::Low,
    RiskLevel::Moderate,
    RiskLevel::High,
];

/// Map a findings count to a risk bucket. Counts past the table clamp to `High`.
pub fn classify(findings: usize) -> RiskLevel {
    LEVELS[findings.min(LEVELS.len() - 1)]
}
