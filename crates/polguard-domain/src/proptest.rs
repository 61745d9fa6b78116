//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Risk classification bounds and monotonicity
//! - Exact-match semantics of the wildcard action check
//! - Findings ordering across statements

use crate::engine::evaluate;
use crate::model::{ConditionPresence, Effect, PolicyDocument, PolicyValue, Statement};
use crate::risk::classify;
use polguard_types::{RiskLevel, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Action names that look like wildcards but are not the bare `*`.
fn arb_non_wildcard_action() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{2,10}:[A-Z][a-zA-Z]{0,15}").unwrap(),
        prop::string::string_regex("[a-z]{2,10}:\\*").unwrap(),
        Just("**".to_string()),
        Just(" *".to_string()),
        Just("*:*".to_string()),
    ]
}

fn arb_policy_value() -> impl Strategy<Value = PolicyValue> {
    prop_oneof![
        Just(PolicyValue::Single("*".to_string())),
        arb_non_wildcard_action().prop_map(PolicyValue::Single),
        prop::collection::vec(
            prop_oneof![Just("*".to_string()), arb_non_wildcard_action()],
            0..5
        )
        .prop_map(PolicyValue::List),
        Just(PolicyValue::Other),
    ]
}

fn arb_effect() -> impl Strategy<Value = Option<Effect>> {
    prop_oneof![
        Just(None),
        Just(Some(Effect::Allow)),
        Just(Some(Effect::Deny)),
        Just(Some(Effect::Unrecognized("Permit".to_string()))),
    ]
}

fn arb_condition() -> impl Strategy<Value = ConditionPresence> {
    prop_oneof![
        Just(ConditionPresence::Absent),
        Just(ConditionPresence::Empty),
        Just(ConditionPresence::Present),
    ]
}

fn arb_statement() -> impl Strategy<Value = Statement> {
    (
        arb_effect(),
        prop::option::of(arb_policy_value()),
        prop::option::of(arb_policy_value()),
        arb_condition(),
    )
        .prop_map(|(effect, action, resource, condition)| Statement {
            effect,
            action,
            resource,
            condition,
        })
}

// ============================================================================
// Risk classifier
// ============================================================================

proptest! {
    #[test]
    fn classify_is_monotonic(a in 0usize..1000, b in 0usize..1000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo) <= classify(hi));
    }

    #[test]
    fn classify_saturates_at_high(n in 3usize..usize::MAX) {
        prop_assert_eq!(classify(n), RiskLevel::High);
    }
}

// ============================================================================
// Engine
// ============================================================================

proptest! {
    /// The wildcard action finding fires iff `*` is present as an exact element.
    #[test]
    fn wildcard_action_is_exact_match(
        others in prop::collection::vec(arb_non_wildcard_action(), 0..6),
        include_star in any::<bool>(),
        position in 0usize..6,
    ) {
        let mut actions = others.clone();
        if include_star {
            let at = position.min(actions.len());
            actions.insert(at, "*".to_string());
        }
        let doc = PolicyDocument::from_statements(vec![Statement {
            action: Some(PolicyValue::List(actions)),
            ..Statement::default()
        }]);

        let findings = evaluate(&doc).expect("well-formed document");
        let fired = findings
            .iter()
            .filter(|f| f.code == ids::CODE_WILDCARD_ACTION)
            .count();
        prop_assert_eq!(fired, usize::from(include_star));
    }

    /// Findings are grouped by statement in document order, at most three per statement.
    #[test]
    fn findings_follow_statement_order(stmts in prop::collection::vec(arb_statement(), 0..12)) {
        let doc = PolicyDocument::from_statements(stmts.clone());
        let findings = evaluate(&doc).expect("well-formed document");

        let indices: Vec<u32> = findings.iter().map(|f| f.statement).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        prop_assert_eq!(&indices, &sorted);

        for i in 0..stmts.len() as u32 {
            let per_statement = indices.iter().filter(|&&x| x == i).count();
            prop_assert!(per_statement <= 3);
        }
    }

    /// The full-access finding never appears without both wildcard findings before it.
    #[test]
    fn full_access_implies_action_and_resource(stmt in arb_statement()) {
        let doc = PolicyDocument::from_statements(vec![stmt]);
        let findings = evaluate(&doc).expect("well-formed document");
        let codes: Vec<&str> = findings.iter().map(|f| f.code.as_str()).collect();

        if codes.contains(&ids::CODE_ALLOW_ALL_UNCONDITIONED) {
            prop_assert_eq!(
                codes,
                vec![
                    ids::CODE_WILDCARD_ACTION,
                    ids::CODE_WILDCARD_RESOURCE,
                    ids::CODE_ALLOW_ALL_UNCONDITIONED,
                ]
            );
        }
    }

    /// Repeated statements are not deduplicated.
    #[test]
    fn repeated_statements_repeat_findings(stmt in arb_statement(), copies in 1usize..5) {
        let once = evaluate(&PolicyDocument::from_statements(vec![stmt.clone()]))
            .expect("well-formed document");
        let many = evaluate(&PolicyDocument::from_statements(vec![stmt; copies]))
            .expect("well-formed document");
        prop_assert_eq!(many.len(), once.len() * copies);
    }
}
