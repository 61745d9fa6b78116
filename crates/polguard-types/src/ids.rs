//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_POLICY_UNRESTRICTED_ACTION: &str = "policy.unrestricted_action";
pub const CHECK_POLICY_UNRESTRICTED_RESOURCE: &str = "policy.unrestricted_resource";
pub const CHECK_POLICY_FULL_ACCESS: &str = "policy.full_access";

// Codes: policy.unrestricted_action
pub const CODE_WILDCARD_ACTION: &str = "wildcard_action";

// Codes: policy.unrestricted_resource
pub const CODE_WILDCARD_RESOURCE: &str = "wildcard_resource";

// Codes: policy.full_access
pub const CODE_ALLOW_ALL_UNCONDITIONED: &str = "allow_all_unconditioned";
