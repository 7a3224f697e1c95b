// src/api/requests.rs
//! Request payloads for the v3 endpoints.
//!
//! Field names follow the wire format: camelCase envelopes around
//! snake_case record data.

use crate::constants::{DEFAULT_USER_LOCALE, DEFAULT_USER_TIME_ZONE};
use crate::model::{CollectionQuery, CursorStack};
use crate::types::{BlockId, CollectionId, CollectionViewId};
use serde::{Deserialize, Serialize};

/// Body for `loadPageChunk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChunkRequest {
    pub chunk_number: u32,
    pub limit: u32,
    pub page_id: BlockId,
    pub vertical_columns: bool,
    pub cursor: CursorStack,
}

impl PageChunkRequest {
    /// The first request of a paginated fetch.
    pub fn initial(page_id: BlockId, limit: u32) -> Self {
        Self {
            chunk_number: 0,
            limit,
            page_id,
            vertical_columns: true,
            cursor: CursorStack::default(),
        }
    }

    /// The follow-up request that resumes from a response cursor.
    ///
    /// The cursor is echoed back verbatim; only the chunk number
    /// advances.
    pub fn next(self, cursor: CursorStack) -> Self {
        Self {
            chunk_number: self.chunk_number + 1,
            cursor,
            ..self
        }
    }
}

/// Loader settings for `queryCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLoader {
    pub limit: u32,
    pub load_content_cover: bool,
    #[serde(rename = "type")]
    pub kind: LoaderKind,
    pub user_locale: String,
    pub user_time_zone: String,
}

impl CollectionLoader {
    /// A table loader with default locale settings.
    pub fn table(limit: u32) -> Self {
        Self {
            limit,
            load_content_cover: true,
            kind: LoaderKind::Table,
            user_locale: DEFAULT_USER_LOCALE.to_string(),
            user_time_zone: DEFAULT_USER_TIME_ZONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    Table,
}

/// Body for `queryCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCollectionRequest {
    pub collection_id: CollectionId,
    pub collection_view_id: CollectionViewId,
    pub loader: CollectionLoader,
    pub query: CollectionQuery,
}

impl QueryCollectionRequest {
    /// A query for the view's own filter/sort settings.
    pub fn new(
        collection_id: CollectionId,
        collection_view_id: CollectionViewId,
        loader: CollectionLoader,
    ) -> Self {
        Self {
            collection_id,
            collection_view_id,
            loader,
            query: CollectionQuery::default(),
        }
    }
}

/// A `(table, id)` pointer into the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPointer {
    pub id: String,
    pub table: String,
}

/// Body for `getRecordValues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordValuesRequest {
    pub requests: Vec<RecordPointer>,
}

/// Body for `getSignedFileUrls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedFileUrlsRequest {
    /// The raw attachment URL stored on the block.
    pub url: String,
    /// The block that grants access to the file.
    pub permission_record: RecordPointer,
}

/// Body for `getPublicPageData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPageDataRequest {
    pub block_id: BlockId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_view_id: Option<CollectionViewId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub save_parent: bool,
    #[serde(default)]
    pub show_move_to: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_domain: Option<String>,
}
