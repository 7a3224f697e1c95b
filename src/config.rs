// src/config.rs
use crate::constants::{DEFAULT_USER_LOCALE, DEFAULT_USER_TIME_ZONE, PAGE_CHUNK_LIMIT};
use crate::error::ClientError;
use crate::types::{AuthToken, ValidationError};
use url::Url;

/// Where the v3 API lives for notion.so.
const PUBLIC_API_BASE: &str = "https://www.notion.so/api/v3";

/// Resolved client configuration — validated and ready to build a client.
///
/// The base URL and loader defaults are explicit state here rather than
/// module-level constants, so tests and self-hosted proxies can point a
/// client anywhere.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint names are joined onto.
    pub base_url: Url,
    /// `token_v2` cookie for private pages; `None` reads public pages only.
    pub token_v2: Option<AuthToken>,
    /// `userLocale` sent with collection loaders.
    pub user_locale: String,
    /// `userTimeZone` sent with collection loaders.
    pub user_time_zone: String,
    /// Records requested per `loadPageChunk` call.
    pub chunk_limit: u32,
}

impl ClientConfig {
    /// Creates a configuration for a non-default endpoint.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ValidationError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Attaches a session token for reading private pages.
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token_v2 = Some(token);
        self
    }

    /// Resolves a configuration from the environment.
    ///
    /// Reads the `NOTION_TOKEN_V2` variable; fails when it is unset so a
    /// misconfigured host is caught at startup, not on the first private
    /// fetch.
    pub fn from_env() -> Result<Self, ClientError> {
        let token = std::env::var("NOTION_TOKEN_V2").map_err(|_| {
            ClientError::MissingConfiguration(
                "NOTION_TOKEN_V2 environment variable not set".to_string(),
            )
        })?;
        Ok(Self::default().with_token(AuthToken::new(token)?))
    }

    /// Joins an endpoint name onto the base URL.
    pub(crate) fn endpoint_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), name)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(PUBLIC_API_BASE).expect("Public API base URL should be valid"),
            token_v2: None,
            user_locale: DEFAULT_USER_LOCALE.to_string(),
            user_time_zone: DEFAULT_USER_TIME_ZONE.to_string(),
            chunk_limit: PAGE_CHUNK_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joining() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint_url("loadPageChunk"),
            "https://www.notion.so/api/v3/loadPageChunk"
        );

        let config = ClientConfig::new("http://localhost:3000/api/v3/").unwrap();
        assert_eq!(
            config.endpoint_url("queryCollection"),
            "http://localhost:3000/api/v3/queryCollection"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(ClientConfig::new("not a url").is_err());
    }
}
