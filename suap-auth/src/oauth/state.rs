//! CSRF state parameter for the authorization-code flow.

use rand::Rng;

/// Generate a cryptographically random state token.
///
/// The caller keeps it in the browser session until the provider redirects back.
pub fn generate() -> String {
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(random_bytes)
}

/// Check the `state` echoed back by the provider against the one that was issued.
///
/// A missing value on either side never matches.
pub fn matches(expected: Option<&str>, received: Option<&str>) -> bool {
    match (expected, received) {
        (Some(expected), Some(received)) => !expected.is_empty() && expected == received,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_hex_and_unique() {
        let s1 = generate();
        let s2 = generate();
        assert_eq!(s1.len(), 64);
        assert!(s1.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(s1, s2, "states should be unique");
    }

    #[test]
    fn test_matches() {
        assert!(matches(Some("abc"), Some("abc")));
        assert!(!matches(Some("abc"), Some("abd")));
        assert!(!matches(None, Some("abc")));
        assert!(!matches(Some("abc"), None));
        assert!(!matches(Some(""), Some("")));
    }
}
