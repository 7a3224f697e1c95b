// src/model/record.rs
//! Records, record maps, and cursors — the unit of exchange with the API.

use super::block::BlockValue;
use super::collection::{CollectionValue, CollectionViewValue};
use super::workspace::{NotionUserValue, SpaceValue};
use crate::types::{BlockId, CollectionId, CollectionViewId, SpaceId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Access role the service granted for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Editor,
    Reader,
    CommentOnly,
    ReadAndWrite,
    None,
    /// A role this client does not recognize yet.
    #[serde(other)]
    Unknown,
}

/// A record as the service returns it: an access role plus the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub role: Role,
    pub value: T,
}

/// Opaque resume position inside a paginated fetch.
///
/// Produced by the server and echoed back verbatim on the next request;
/// the client never inspects the fields beyond carrying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub id: BlockId,
    pub table: String,
    pub index: i64,
}

/// Ordered sequence of cursors; an empty stack means the fetch is done.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorStack {
    pub stack: Vec<Cursor>,
}

impl CursorStack {
    /// Whether the server has signalled that no more pages remain.
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}

/// One table of records, keyed by id, in first-seen order.
pub type RecordTable<K, V> = IndexMap<K, Record<V>>;

/// Everything one response (or one assembled fetch) knows, per table.
///
/// `None` means the table never appeared; a present table is never
/// empty once it has been through [`RecordMap::merge`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<RecordTable<BlockId, BlockValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notion_user: Option<RecordTable<UserId, NotionUserValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<RecordTable<SpaceId, SpaceValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<RecordTable<CollectionId, CollectionValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_view: Option<RecordTable<CollectionViewId, CollectionViewValue>>,
}

impl RecordMap {
    /// Merges partial record maps, table by table.
    ///
    /// Within each table the first occurrence of an id wins; later
    /// partials never overwrite earlier ones. A table that would merge
    /// to an empty map stays `None`.
    pub fn merge(partials: impl IntoIterator<Item = RecordMap>) -> RecordMap {
        let mut blocks = Vec::new();
        let mut users = Vec::new();
        let mut spaces = Vec::new();
        let mut collections = Vec::new();
        let mut views = Vec::new();

        for partial in partials {
            blocks.push(partial.block);
            users.push(partial.notion_user);
            spaces.push(partial.space);
            collections.push(partial.collection);
            views.push(partial.collection_view);
        }

        RecordMap {
            block: merge_table(blocks),
            notion_user: merge_table(users),
            space: merge_table(spaces),
            collection: merge_table(collections),
            collection_view: merge_table(views),
        }
    }

    /// Looks up a block record by id.
    pub fn block(&self, id: &BlockId) -> Option<&Record<BlockValue>> {
        self.block.as_ref().and_then(|table| table.get(id))
    }
}

/// First-seen-wins merge over an ordered sequence of partial tables.
///
/// Returns `None` when the merged table would be empty, so "the table
/// never appeared" and "the table appeared but held nothing" are
/// indistinguishable downstream.
pub(crate) fn merge_table<K, V>(
    parts: impl IntoIterator<Item = Option<IndexMap<K, V>>>,
) -> Option<IndexMap<K, V>>
where
    K: std::hash::Hash + Eq,
{
    let mut merged = IndexMap::new();
    for part in parts.into_iter().flatten() {
        for (key, value) in part {
            merged.entry(key).or_insert(value);
        }
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}
