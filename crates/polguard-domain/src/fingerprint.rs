use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a policy finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - group label
/// - document file name
/// - statement index
pub fn fingerprint_for_statement(
    check_id: &str,
    code: &str,
    group: &str,
    filename: &str,
    statement: u32,
) -> String {
    let statement = statement.to_string();
    let canonical = [check_id, code, group, filename, statement.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
