use subtle::ConstantTimeEq;

/// Header carrying the caller's shared secret on proxied requests
pub const INTERNAL_SECRET_HEADER: &str = "x-internal-secret";

/// Check a caller-supplied shared secret against the configured one.
///
/// The comparison is constant-time over the secret bytes so response
/// timing does not leak how much of the secret matched. An empty
/// configured secret authenticates no caller.
pub fn secret_matches(expected: &str, provided: Option<&str>) -> bool {
    if expected.is_empty() {
        return false;
    }

    let Some(provided) = provided else {
        return false;
    };

    provided.len() == expected.len()
        && provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
