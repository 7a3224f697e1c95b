// src/api/responses.rs
//! Response envelopes for the v3 endpoints.

use crate::model::{CursorStack, RecordMap, Role};
use crate::types::{BlockId, SpaceId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope from `loadPageChunk` — also the shape of a fully assembled
/// fetch, whose cursor is then the exhausted empty stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChunkResponse {
    /// Absent or empty-stack means pagination is complete.
    #[serde(default)]
    pub cursor: Option<CursorStack>,
    pub record_map: RecordMap,
}

impl PageChunkResponse {
    /// Whether the server signalled that more chunks remain.
    pub fn has_more(&self) -> bool {
        self.cursor
            .as_ref()
            .is_some_and(|cursor| !cursor.is_exhausted())
    }
}

/// Envelope from `queryCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCollectionResponse {
    pub record_map: RecordMap,
    pub result: QueryResult,
}

/// The listing half of a collection query: row order and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(rename = "type")]
    pub kind: String,
    /// Rows matching the query server-side, which may exceed the number
    /// of ids actually listed.
    pub total: u32,
    #[serde(default)]
    pub block_ids: Vec<BlockId>,
    #[serde(default)]
    pub aggregation_results: Vec<AggregationResult>,
}

/// One aggregation outcome; the value shape depends on the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub id: String,
    #[serde(default)]
    pub value: Value,
}

/// One entry from `getRecordValues`; `value` is absent when the record
/// does not exist or is not readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordValueResult {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Envelope from `getRecordValues`, one entry per requested pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordValuesResponse {
    #[serde(default)]
    pub result: Vec<RecordValueResult>,
}

/// Envelope from `getSignedFileUrls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedFileUrlsResponse {
    #[serde(default)]
    pub signed_urls: Vec<String>,
}

/// Envelope from `getPublicPageData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPageDataResponse {
    #[serde(default)]
    pub has_public_access: bool,
    #[serde(default)]
    pub can_join_space: bool,
    #[serde(default)]
    pub user_has_explicit_access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<SpaceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_domain: Option<String>,
}
