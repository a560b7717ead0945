//! Tracking token generation.
//!
//! Tokens are opaque, unguessable identifiers bound one-to-one with targets
//! and embedded in tracking links.

use base64::Engine as _;

/// Random bytes in a freshly issued token (128 bits of entropy).
const TOKEN_LENGTH_BYTES: usize = 16;

/// Random bytes in a collision-retry token (192 bits of entropy).
const RETRY_TOKEN_LENGTH_BYTES: usize = 24;

/// Generates a cryptographically secure tracking token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 22-character token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    random_token(TOKEN_LENGTH_BYTES)
}

/// Generates a longer token for the single retry after a uniqueness
/// conflict (32 characters).
pub fn generate_retry_token() -> String {
    random_token(RETRY_TOKEN_LENGTH_BYTES)
}

fn random_token(len: usize) -> String {
    let mut buffer = vec![0u8; len];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_not_empty() {
        let token = generate_token();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_generate_token_has_correct_length() {
        let token = generate_token();
        assert_eq!(token.len(), 22);
    }

    #[test]
    fn test_generate_retry_token_is_longer() {
        let token = generate_retry_token();
        assert_eq!(token.len(), 32);
    }

    #[test]
    fn test_generate_token_url_safe_characters() {
        let token = generate_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            let token = generate_token();
            tokens.insert(token);
        }

        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_generate_token_no_padding() {
        let token = generate_token();
        assert!(!token.contains('='));
        let retry = generate_retry_token();
        assert!(!retry.contains('='));
    }
}
