//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after policy examples.
    pub examples: ExamplePair,
}

/// Before and after policy examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Statement that would trigger a finding.
    pub before: &'static str,
    /// Statement that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_POLICY_UNRESTRICTED_ACTION => Some(explain_unrestricted_action()),
        ids::CHECK_POLICY_UNRESTRICTED_RESOURCE => Some(explain_unrestricted_resource()),
        ids::CHECK_POLICY_FULL_ACCESS => Some(explain_full_access()),

        // Codes
        ids::CODE_WILDCARD_ACTION => Some(explain_wildcard_action()),
        ids::CODE_WILDCARD_RESOURCE => Some(explain_wildcard_resource()),
        ids::CODE_ALLOW_ALL_UNCONDITIONED => Some(explain_allow_all_unconditioned()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_POLICY_UNRESTRICTED_ACTION,
        ids::CHECK_POLICY_UNRESTRICTED_RESOURCE,
        ids::CHECK_POLICY_FULL_ACCESS,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_WILDCARD_ACTION,
        ids::CODE_WILDCARD_RESOURCE,
        ids::CODE_ALLOW_ALL_UNCONDITIONED,
    ]
}

// --- Check-level explanations ---

fn explain_unrestricted_action() -> Explanation {
    Explanation {
        title: "Unrestricted Action",
        description: "\
Detects statements whose `Action` is the bare wildcard `*`, either as a single
string or as one element of an action list.

A wildcard action grants every API operation of every service:
- New services and operations are granted automatically as the provider adds them
- The statement cannot be reviewed for least privilege
- Combined with a broad resource it is equivalent to administrator access

Only the exact element `*` is flagged. Service-scoped wildcards such as
`s3:*` are not reported by this check.",
        remediation: "\
Replace the wildcard with the specific actions the principal needs:
- List the operations explicitly (`s3:GetObject`, `s3:PutObject`)
- Prefer service-scoped read-only sets over global wildcards
- Split unrelated permissions into separate statements",
        examples: ExamplePair {
            before: r#"{
  "Effect": "Allow",
  "Action": ["s3:GetObject", "*"],
  "Resource": "arn:aws:s3:::reports/*"
}"#,
            after: r#"{
  "Effect": "Allow",
  "Action": ["s3:GetObject"],
  "Resource": "arn:aws:s3:::reports/*"
}"#,
        },
    }
}

fn explain_unrestricted_resource() -> Explanation {
    Explanation {
        title: "Unrestricted Resource",
        description: "\
Detects statements whose `Resource` is exactly the string `*`.

A wildcard resource applies the statement to every resource in the account,
including resources created after the policy was written.

Resource lists are not inspected: a list containing `*` is not reported.",
        remediation: "\
Scope the statement to the resources it is meant for:
- Use full ARNs for individual resources
- Use prefix patterns (`arn:aws:s3:::bucket/*`) for a bounded set",
        examples: ExamplePair {
            before: r#"{
  "Effect": "Allow",
  "Action": "s3:GetObject",
  "Resource": "*"
}"#,
            after: r#"{
  "Effect": "Allow",
  "Action": "s3:GetObject",
  "Resource": "arn:aws:s3:::reports/*"
}"#,
        },
    }
}

fn explain_full_access() -> Explanation {
    Explanation {
        title: "Full Unconditioned Access",
        description: "\
Detects `Allow` statements granting the scalar action `*` on resource `*` with
no `Condition` block (or an empty one).

This is administrator access with no guard rails. It is reported in addition
to the unrestricted action and unrestricted resource findings for the same
statement.

An action list containing `*` does not trigger this check.",
        remediation: "\
Remove the statement, or constrain it:
- Replace it with a managed role scoped to the job function
- Add a `Condition` (source network, MFA, principal tags) if broad access
  is genuinely required for break-glass use",
        examples: ExamplePair {
            before: r#"{
  "Effect": "Allow",
  "Action": "*",
  "Resource": "*"
}"#,
            after: r#"{
  "Effect": "Allow",
  "Action": "*",
  "Resource": "*",
  "Condition": { "Bool": { "aws:MultiFactorAuthPresent": "true" } }
}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_wildcard_action() -> Explanation {
    let mut exp = explain_unrestricted_action();
    exp.title = "Wildcard Action";
    exp
}

fn explain_wildcard_resource() -> Explanation {
    let mut exp = explain_unrestricted_resource();
    exp.title = "Wildcard Resource";
    exp
}

fn explain_allow_all_unconditioned() -> Explanation {
    let mut exp = explain_full_access();
    exp.title = "Allow All Without Condition";
    exp
}
