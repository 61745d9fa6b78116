use crate::model::Statement;
use polguard_types::{Finding, ids};

pub const MESSAGE: &str = "FULL access (Allow '*' on '*' with no condition)";

/// Narrower than the action and resource checks: the action must be the scalar `"*"`,
/// so `["*"]` does not qualify.
pub fn run(index: u32, stmt: &Statement, out: &mut Vec<Finding>) {
    if stmt.is_allow()
        && stmt.action_is("*")
        && stmt.resource_is("*")
        && stmt.condition.is_unconditioned()
    {
        out.push(super::finding(
            ids::CHECK_POLICY_FULL_ACCESS,
            ids::CODE_ALLOW_ALL_UNCONDITIONED,
            MESSAGE,
            index,
        ));
    }
}
