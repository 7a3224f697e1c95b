// src/api/client.rs
//! HTTP client for the v3 API.
//!
//! A thin wrapper around reqwest: authentication, logged POSTs, status
//! checks, and typed deserialization. No assembly logic lives here —
//! the client neither interprets cursors nor retries; failures surface
//! to the caller unchanged.

use super::requests::{
    CollectionLoader, LoaderKind, PageChunkRequest, PublicPageDataRequest, QueryCollectionRequest,
    RecordValuesRequest, SignedFileUrlsRequest,
};
use super::responses::{
    PageChunkResponse, PublicPageDataResponse, QueryCollectionResponse, RecordValuesResponse,
    SignedFileUrlsResponse,
};
use crate::config::ClientConfig;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::ClientError;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A reqwest-backed client for `www.notion.so/api/v3`.
#[derive(Clone)]
pub struct NotionHttpClient {
    http: Client,
    config: ClientConfig,
}

impl NotionHttpClient {
    /// Creates a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .default_headers(Self::create_headers(&config)?)
            .build()?;
        Ok(Self { http, config })
    }

    /// Creates a client for the public endpoint with no authentication.
    pub fn anonymous() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates the default headers for v3 requests.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, ClientError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        if let Some(token) = &config.token_v2 {
            let cookie = format!("token_v2={}", token.as_str());
            headers.insert(
                header::COOKIE,
                header::HeaderValue::from_str(&cookie).map_err(|e| {
                    ClientError::MissingConfiguration(format!("Invalid token_v2 value: {}", e))
                })?,
            );
        }

        Ok(headers)
    }

    /// POSTs a JSON body to an endpoint and deserializes the JSON reply.
    ///
    /// Non-2xx statuses and non-JSON bodies become errors here; the
    /// caller never sees a raw HTTP response.
    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);
        log::debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("{} responded {}", endpoint, status);
            return Err(ClientError::Service {
                endpoint: endpoint.to_string(),
                status,
                body: preview(&text),
            });
        }

        serde_json::from_str(&text).map_err(|source| ClientError::Malformed {
            endpoint: endpoint.to_string(),
            source,
            body: preview(&text),
        })
    }

    /// Point lookups by `(table, id)`.
    pub async fn get_record_values(
        &self,
        request: &RecordValuesRequest,
    ) -> Result<RecordValuesResponse, ClientError> {
        self.post("getRecordValues", request).await
    }

    /// Resolves time-limited download URLs for file-backed blocks.
    pub async fn get_signed_file_urls(
        &self,
        request: &SignedFileUrlsRequest,
    ) -> Result<SignedFileUrlsResponse, ClientError> {
        self.post("getSignedFileUrls", request).await
    }

    /// Public-share metadata for a block.
    pub async fn get_public_page_data(
        &self,
        request: &PublicPageDataRequest,
    ) -> Result<PublicPageDataResponse, ClientError> {
        self.post("getPublicPageData", request).await
    }

    /// Fetches every chunk of a page with this client's configured
    /// chunk limit.
    pub async fn load_full_page(
        &self,
        page_id: crate::types::BlockId,
    ) -> Result<PageChunkResponse, ClientError> {
        super::pagination::load_full_page_chunk(self, page_id, self.config.chunk_limit).await
    }

    /// A table loader carrying this client's locale settings.
    pub fn collection_loader(&self, limit: u32) -> CollectionLoader {
        CollectionLoader {
            limit,
            load_content_cover: true,
            kind: LoaderKind::Table,
            user_locale: self.config.user_locale.clone(),
            user_time_zone: self.config.user_time_zone.clone(),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl super::RecordSource for NotionHttpClient {
    async fn load_page_chunk(
        &self,
        request: &PageChunkRequest,
    ) -> Result<PageChunkResponse, ClientError> {
        self.post("loadPageChunk", request).await
    }

    async fn query_collection(
        &self,
        request: &QueryCollectionRequest,
    ) -> Result<QueryCollectionResponse, ClientError> {
        log::debug!(
            "queryCollection {} view {} limit {}",
            request.collection_id,
            request.collection_view_id,
            request.loader.limit
        );
        self.post("queryCollection", request).await
    }
}

/// Truncates a response body for error messages.
fn preview(body: &str) -> String {
    if body.len() <= ERROR_BODY_PREVIEW_LENGTH {
        return body.to_string();
    }
    let mut preview: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
    preview.push('…');
    preview
}
