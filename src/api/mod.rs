// src/api/mod.rs
//! v3 API interaction — the ability to fetch records from the service.
//!
//! This module separates the I/O surface (`client`) from the wire shapes
//! (`requests`, `responses`) and the pagination logic that drives them.

pub mod client;
mod pagination;
mod requests;
mod responses;

use crate::error::ClientError;

pub use client::NotionHttpClient;
pub use pagination::load_full_page_chunk;
pub use requests::{
    CollectionLoader, LoaderKind, PageChunkRequest, PublicPageDataRequest, QueryCollectionRequest,
    RecordPointer, RecordValuesRequest, SignedFileUrlsRequest,
};
pub use responses::{
    AggregationResult, PageChunkResponse, PublicPageDataResponse, QueryCollectionResponse,
    QueryResult, RecordValueResult, RecordValuesResponse, SignedFileUrlsResponse,
};

/// The ability to fetch one page of records from the store.
///
/// This is the only boundary the assembly core sees: pagination, tree
/// building, and row projection all run against any implementation, so
/// tests drive them with scripted in-memory sources. Retries, timeouts,
/// and cancellation are the implementation's business; the core issues
/// one call per page and propagates whatever comes back.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches one chunk of a page's records at the given cursor.
    async fn load_page_chunk(
        &self,
        request: &PageChunkRequest,
    ) -> Result<PageChunkResponse, ClientError>;

    /// Runs a filtered/sorted collection view query.
    async fn query_collection(
        &self,
        request: &QueryCollectionRequest,
    ) -> Result<QueryCollectionResponse, ClientError>;
}
