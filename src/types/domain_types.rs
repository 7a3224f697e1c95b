// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;

/// The `token_v2` cookie a logged-in notion.so session carries.
///
/// Anonymous clients can read public pages without one; private pages
/// require it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new auth token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidAuthToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.len() < 20 {
            return Err(ValidationError::InvalidAuthToken {
                reason: "token is too short to be a token_v2 cookie".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a token without validation (only for testing)
    #[cfg(test)]
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_validation() {
        assert!(AuthToken::new("").is_err());
        assert!(AuthToken::new("short").is_err());
        assert!(AuthToken::new("a-long-enough-cookie-value").is_ok());
    }

    #[test]
    fn test_display_is_redacted() {
        let token = AuthToken::new("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(token.to_string(), "012345...");
    }
}
