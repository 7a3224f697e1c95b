use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for record ids with phantom types.
///
/// The canonical form is the hyphenated lowercase UUID the v3 API puts
/// on the wire. `parse` also accepts the 32-character compact form that
/// appears in notion.so URLs, and full notion.so URLs themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for the record tables an id can point into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionViewMarker;

/// Type aliases for specific ID types
pub type BlockId = Id<BlockMarker>;
pub type UserId = Id<UserMarker>;
pub type SpaceId = Id<SpaceMarker>;
pub type CollectionId = Id<CollectionMarker>;
pub type CollectionViewId = Id<CollectionViewMarker>;

impl<T> Id<T> {
    /// Parse various id formats into the canonical hyphenated form
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_record_id(input)?;
        Ok(Self {
            value: normalized,
            _phantom: PhantomData,
        })
    }

    /// Create an ID from an already normalized string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Create a new random v4 UUID ID
    pub fn new_v4() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            value: uuid.as_hyphenated().to_string(),
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the 32-character compact form used in notion.so URLs
    pub fn to_compact(&self) -> String {
        self.value.replace('-', "")
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Canonicalize when possible, but never reject what the server
        // sent: record maps are keyed by these strings verbatim.
        let value = String::deserialize(deserializer)?;
        Ok(match normalize_record_id(&value) {
            Ok(normalized) => Self::from_normalized(normalized),
            Err(_) => Self::from_normalized(value),
        })
    }
}

/// Normalize various id formats into the hyphenated canonical form
fn normalize_record_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim().trim_end_matches('/');

    // Handle URLs
    if input.starts_with("http://") || input.starts_with("https://") {
        if let Some(id) = extract_id_from_url(input) {
            return normalize_record_id(&id);
        }
        return Err(ValidationError::InvalidId(format!(
            "Could not extract ID from URL: {}",
            input
        )));
    }

    // Remove any dashes and validate
    let compact = input.replace('-', "");

    // Record ids are 32 hex characters
    if compact.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            compact.len()
        )));
    }

    if !compact.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    let compact = compact.to_lowercase();
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &compact[0..8],
        &compact[8..12],
        &compact[12..16],
        &compact[16..20],
        &compact[20..32]
    ))
}

/// Extract an id from a notion.so URL
fn extract_id_from_url(url: &str) -> Option<String> {
    lazy_static::lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        ).expect("Failed to compile record ID regex - this is a bug in the code");
    }

    ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id_match| id_match.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        // Compact form from a URL slug
        let id = BlockId::parse("1d748958865c4cf397d6c996756cd77e").unwrap();
        assert_eq!(id.as_str(), "1d748958-865c-4cf3-97d6-c996756cd77e");

        // Already hyphenated
        let id = BlockId::parse("1d748958-865c-4cf3-97d6-c996756cd77e").unwrap();
        assert_eq!(id.as_str(), "1d748958-865c-4cf3-97d6-c996756cd77e");

        // Full share URL
        let id =
            BlockId::parse("https://www.notion.so/notinktest/Get-Started-1d748958865c4cf397d6c996756cd77e")
                .unwrap();
        assert_eq!(id.as_str(), "1d748958-865c-4cf3-97d6-c996756cd77e");
    }

    #[test]
    fn test_uppercase_is_canonicalized() {
        let id = BlockId::parse("1D748958865C4CF397D6C996756CD77E").unwrap();
        assert_eq!(id.as_str(), "1d748958-865c-4cf3-97d6-c996756cd77e");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(BlockId::parse("too-short").is_err());
        assert!(BlockId::parse("not-hex-chars-0000000000000000000").is_err());
        assert!(BlockId::parse("").is_err());
        assert!(BlockId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_to_compact() {
        let id = BlockId::parse("1d748958-865c-4cf3-97d6-c996756cd77e").unwrap();
        assert_eq!(id.to_compact(), "1d748958865c4cf397d6c996756cd77e");
    }

    #[test]
    fn test_deserialize_keeps_unrecognized_keys_verbatim() {
        let id: BlockId = serde_json::from_str("\"not-a-uuid\"").unwrap();
        assert_eq!(id.as_str(), "not-a-uuid");
    }
}
