use crate::model::Statement;
use polguard_types::{Finding, ids};

pub const MESSAGE: &str = "Unrestricted resource: '*'";

pub fn run(index: u32, stmt: &Statement, out: &mut Vec<Finding>) {
    // Scalar form only. A resource list containing "*" is not reported.
    if stmt.resource_is("*") {
        out.push(super::finding(
            ids::CHECK_POLICY_UNRESTRICTED_RESOURCE,
            ids::CODE_WILDCARD_RESOURCE,
            MESSAGE,
            index,
        ));
    }
}
