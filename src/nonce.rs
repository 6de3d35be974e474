//! Per-render script nonces.
//!
//! Each rendered section document gets a fresh random token scoping which
//! inline scripts the document may execute. Reusing a token across renders
//! would let script injected through guide Markdown ride an earlier grant,
//! so callers must generate one per render and never cache it.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of a generated nonce, in characters.
pub const NONCE_LEN: usize = 32;

/// Generates a fresh alphanumeric nonce for one render.
pub fn generate() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_length_and_charset() {
        // Act
        let nonce = generate();

        // Assert
        assert_eq!(nonce.len(), NONCE_LEN, "Nonce should be {} chars", NONCE_LEN);
        assert!(
            nonce.chars().all(|c| c.is_ascii_alphanumeric()),
            "Nonce must be alphanumeric to embed safely in a CSP header: {}",
            nonce
        );
    }

    #[test]
    fn test_consecutive_nonces_differ() {
        // Act
        let first = generate();
        let second = generate();

        // Assert
        assert_ne!(first, second, "Tokens must not repeat across renders");
    }
}
