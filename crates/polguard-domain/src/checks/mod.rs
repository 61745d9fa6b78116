use crate::model::Statement;
use polguard_types::Finding;

mod full_access;
mod unrestricted_action;
mod unrestricted_resource;


pub use full_access::MESSAGE as FULL_ACCESS_MESSAGE;
pub use unrestricted_action::MESSAGE as UNRESTRICTED_ACTION_MESSAGE;
pub use unrestricted_resource::MESSAGE as UNRESTRICTED_RESOURCE_MESSAGE;

/// Run every check against one statement, appending findings in check order.
pub fn run_all(index: u32, stmt: &Statement, out: &mut Vec<Finding>) {
    unrestricted_action::run(index, stmt, out);
    unrestricted_resource::run(index, stmt, out);
    full_access::run(index, stmt, out);
}

fn finding(check_id: &str, code: &str, message: &str, index: u32) -> Finding {
    Finding {
        check_id: check_id.to_string(),
        code: code.to_string(),
        message: message.to_string(),
        statement: index,
        fingerprint: None,
    }
}
