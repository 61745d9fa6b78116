use polguard_types::{Finding, ReportRow, RiskLevel, SecureStatus};

pub fn clean_row(filename: &str, group: &str) -> ReportRow {
    ReportRow {
        filename: filename.to_string(),
        group: group.to_string(),
        is_secure: SecureStatus::Yes,
        risk_level: Some(RiskLevel::None),
        violations: "None".to_string(),
        findings: Vec::new(),
        error: None,
    }
}

pub fn risky_row(filename: &str, group: &str, messages: &[&str]) -> ReportRow {
    let risk_level = match messages.len() {
        0 => RiskLevel::None,
        1 => RiskLevel::Low,
        2 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    };
    ReportRow {
        filename: filename.to_string(),
        group: group.to_string(),
        is_secure: SecureStatus::No,
        risk_level: Some(risk_level),
        violations: messages.join("; "),
        findings: messages
            .iter()
            .map(|m| Finding {
                check_id: "policy.test".to_string(),
                code: "test".to_string(),
                message: m.to_string(),
                statement: 0,
                fingerprint: None,
            })
            .collect(),
        error: None,
    }
}

pub fn error_row(filename: &str, group: &str, cause: &str) -> ReportRow {
    ReportRow {
        filename: filename.to_string(),
        group: group.to_string(),
        is_secure: SecureStatus::Error,
        risk_level: None,
        violations: format!("Error reading file: {cause}"),
        findings: Vec::new(),
        error: Some(cause.to_string()),
    }
}
