use crate::model::{ConditionPresence, Effect, PolicyValue, Statement};
use polguard_types::{Finding, ReportRow, RiskLevel, SecureStatus};

pub fn statement(
    effect: Option<Effect>,
    action: Option<PolicyValue>,
    resource: Option<PolicyValue>,
    condition: ConditionPresence,
) -> Statement {
    Statement {
        effect,
        action,
        resource,
        condition,
    }
}

pub fn allow(action: PolicyValue, resource: PolicyValue) -> Statement {
    statement(
        Some(Effect::Allow),
        Some(action),
        Some(resource),
        ConditionPresence::Absent,
    )
}

pub fn single(s: &str) -> PolicyValue {
    PolicyValue::Single(s.to_string())
}

pub fn list(items: &[&str]) -> PolicyValue {
    PolicyValue::List(items.iter().map(|s| s.to_string()).collect())
}

pub fn row(
    filename: &str,
    is_secure: SecureStatus,
    risk_level: Option<RiskLevel>,
    findings: usize,
) -> ReportRow {
    ReportRow {
        filename: filename.to_string(),
        group: "test_policies".to_string(),
        is_secure,
        risk_level,
        violations: String::new(),
        findings: (0..findings)
            .map(|i| Finding {
                check_id: "policy.test".to_string(),
                code: "test".to_string(),
                message: "test".to_string(),
                statement: i as u32,
                fingerprint: None,
            })
            .collect(),
        error: None,
    }
}
