use polguard_types::{AuditSummary, ReportRow, RiskLevel, SecureStatus};

/// Aggregate counts over a finished row set.
pub fn summarize(rows: &[ReportRow]) -> AuditSummary {
    let mut summary = AuditSummary {
        documents_scanned: rows.len() as u32,
        ..AuditSummary::default()
    };

    for row in rows {
        match row.is_secure {
            SecureStatus::Yes => summary.secure += 1,
            SecureStatus::No => summary.insecure += 1,
            SecureStatus::Error => summary.errors += 1,
        }
        summary.findings_total += row.findings.len() as u32;
        match row.risk_level {
            Some(RiskLevel::None) => summary.by_risk.none += 1,
            Some(RiskLevel::Low) => summary.by_risk.low += 1,
            Some(RiskLevel::Moderate) => summary.by_risk.moderate += 1,
            Some(RiskLevel::High) => summary.by_risk.high += 1,
            None => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row;

    #[test]
    fn summarize_counts_statuses_and_risks() {
        let rows = vec![
            row("a.json", SecureStatus::Yes, Some(RiskLevel::None), 0),
            row("b.json", SecureStatus::No, Some(RiskLevel::High), 3),
            row("c.json", SecureStatus::No, Some(RiskLevel::Low), 1),
            row("d.json", SecureStatus::Error, None, 0),
        ];

        let summary = summarize(&rows);
        assert_eq!(summary.documents_scanned, 4);
        assert_eq!(summary.secure, 1);
        assert_eq!(summary.insecure, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.findings_total, 4);
        assert_eq!(summary.by_risk.none, 1);
        assert_eq!(summary.by_risk.low, 1);
        assert_eq!(summary.by_risk.moderate, 0);
        assert_eq!(summary.by_risk.high, 1);
    }
}
