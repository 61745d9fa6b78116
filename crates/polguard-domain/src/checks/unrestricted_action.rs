use crate::model::Statement;
use polguard_types::{Finding, ids};

pub const MESSAGE: &str = "Unrestricted action: '*'";

pub fn run(index: u32, stmt: &Statement, out: &mut Vec<Finding>) {
    let Some(action) = stmt.action.as_ref() else {
        return;
    };

    // Exact element match only; `s3:*` is not a global wildcard.
    if action.is_exactly("*") || action.contains("*") {
        out.push(super::finding(
            ids::CHECK_POLICY_UNRESTRICTED_ACTION,
            ids::CODE_WILDCARD_ACTION,
            MESSAGE,
            index,
        ));
    }
}
