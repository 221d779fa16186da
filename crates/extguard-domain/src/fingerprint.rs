use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an external-dependency finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - source package name
/// - constant name
/// - constant definition path
pub fn fingerprint_for_reference(
    check_id: &str,
    code: &str,
    source_package: &str,
    constant: &str,
    defined_in: &str,
) -> String {
    let canonical = [check_id, code, source_package, constant, defined_in].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
