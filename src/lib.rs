// src/lib.rs
//! notion3 — unofficial async client for Notion's private v3 API.
//!
//! The v3 endpoints (`loadPageChunk`, `queryCollection`, …) speak a
//! record-map dialect: every response carries partial per-table maps of
//! `(id, role, value)` records, delimited by an opaque cursor stack.
//! This crate turns those partial responses into useful shapes:
//!
//! - [`load_full_page_chunk`] — follows the cursor stack until the
//!   server reports completion and merges the partial maps (first chunk
//!   wins per id) into one [`RecordMap`].
//! - [`build_block_tree`] / [`load_block_tree`] — resolves `content`
//!   references into a recursive [`BlockNode`] tree, dropping dangling
//!   references silently.
//! - [`load_collection_items`] — runs a collection-view query, widening
//!   the limit once for large collections, and projects each row
//!   through the collection schema into [`CollectionItem`] rows.
//!
//! All fetching goes through the [`RecordSource`] trait;
//! [`NotionHttpClient`] is the reqwest-backed implementation.
//!
//! ```no_run
//! use notion3::{load_block_tree, BlockId, NotionHttpClient};
//!
//! # async fn demo() -> Result<(), notion3::ClientError> {
//! let client = NotionHttpClient::anonymous()?;
//! let page = BlockId::parse("1d748958865c4cf397d6c996756cd77e")?;
//! let tree = load_block_tree(&client, page).await?;
//! println!("{} top-level blocks", tree.children().len());
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod constants;
mod error;
mod model;
mod tree;
mod types;
mod views;

// --- Error handling ---
pub use crate::error::{ClientError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::constants::{COLLECTION_PAGE_STRIDE, PAGE_CHUNK_LIMIT};

// --- Domain types ---
pub use crate::types::{AuthToken, BlockId, CollectionId, CollectionViewId, Id, SpaceId, UserId};

// --- Records and record maps ---
pub use crate::model::{Cursor, CursorStack, Record, RecordMap, RecordTable, Role};

// --- Blocks ---
pub use crate::model::blocks::{
    BlockCommon, BookmarkBlock, BookmarkFormat, BookmarkProperties, CalloutBlock, CalloutFormat,
    CodeBlock, CodeProperties, CollectionViewBlock, CollectionViewPageBlock, ColumnBlock,
    ColumnFormat, ColumnListBlock, DividerBlock, EmbedBlock, EmbedFormat, EmbedProperties,
    FileBlock, FileProperties, ListBlock, MediaBlock, PageBlock, PageFormat, Permission,
    TableOfContentsBlock, TextBlock, TextProperties, ToDoBlock, ToDoProperties, TocFormat,
    UnknownBlock,
};
pub use crate::model::BlockValue;

// --- Rich text ---
pub use crate::model::{plain_text, Decoration, RichText, TextSpan};

// --- Collections ---
pub use crate::model::{
    AggregateClause, CollectionFormat, CollectionQuery, CollectionValue, CollectionViewKind,
    CollectionViewValue, FilterClause, FilterOperator, PropertyVisibility, SchemaField, SchemaKind,
    SelectOption, SortClause,
};

// --- Users and workspaces ---
pub use crate::model::{NotionUserValue, SpaceValue};

// --- API client ---
pub use crate::api::{
    load_full_page_chunk, AggregationResult, CollectionLoader, LoaderKind, NotionHttpClient,
    PageChunkRequest, PageChunkResponse, PublicPageDataRequest, PublicPageDataResponse,
    QueryCollectionRequest, QueryCollectionResponse, QueryResult, RecordPointer, RecordSource,
    RecordValueResult, RecordValuesRequest, RecordValuesResponse, SignedFileUrlsRequest,
    SignedFileUrlsResponse,
};

// --- Assembly ---
pub use crate::tree::{build_block_tree, load_block_tree, BlockNode};
pub use crate::views::{load_collection_items, CollectionCell, CollectionItem};
