//! Payload structs for the block variants.
//!
//! The v3 wire format stores every block as one flat JSON object whose
//! `type` field picks the variant; the variant structs here flatten a
//! shared [`BlockCommon`] and add the fields that variant family carries.

use super::record::Role;
use super::text::RichText;
use crate::types::{BlockId, CollectionId, CollectionViewId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every block record carries, whatever its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    #[serde(default)]
    pub version: u64,
    #[serde(default = "crate::model::default_true")]
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<i64>,
}

impl BlockCommon {
    /// A minimal live block with the given id.
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            version: 0,
            alive: true,
            parent_id: None,
            parent_table: None,
            created_by: None,
            created_time: None,
            last_edited_by: None,
            last_edited_time: None,
        }
    }
}

/// One entry of a page's or space's permission list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub role: Role,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// `properties` payload of the text block family.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title: RichText,
}

/// Page block — the root of a document and the row type of collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BlockId>>,
    /// Raw property cells keyed by the schema's field name. The shape of
    /// each cell depends on the collection schema, so it stays untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<PageFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_cover: Option<String>,
    /// Vertical cover crop, 0.0..=1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_cover_position: Option<f64>,
}

/// Text, headers, quotes, equations — blocks that are just a styled run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<TextProperties>,
}

/// List items, toggles — styled runs that can also nest children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<TextProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BlockId>>,
}

/// To-do block with its checked state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ToDoProperties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title: RichText,
    /// `[["Yes"]]` when checked, `[["No"]]` or absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<Vec<Vec<String>>>,
}

impl ToDoBlock {
    pub fn is_checked(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|props| props.checked.as_ref())
            .and_then(|cell| cell.first())
            .and_then(|entry| entry.first())
            .is_some_and(|flag| flag == "Yes")
    }
}

/// Callout block: a styled run plus icon/color formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<TextProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<CalloutFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_icon: Option<String>,
}

/// Divider — no payload beyond the common fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
}

/// Table-of-contents block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOfContentsBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TocFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TocFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_color: Option<String>,
}

/// Code block with its language selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<CodeProperties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title: RichText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language: RichText,
}

/// Inline collection view embedded in a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionViewBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub view_ids: Vec<CollectionViewId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<CollectionId>,
}

/// Full-page collection view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionViewPageBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub view_ids: Vec<CollectionViewId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<CollectionId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

/// Column inside a column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BlockId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColumnFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnFormat {
    /// Fraction of the row width this column takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_ratio: Option<f64>,
}

/// Horizontal layout container; children are `column` blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnListBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BlockId>>,
}

/// Sizing and source formatting shared by the embed family.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_full_width: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_page_width: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_preserve_scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<RichText>,
}

/// Embeds of external content: tweets, gists, figma files, plain iframes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<EmbedFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<EmbedProperties>,
}

/// Uploaded media: images, video, audio. Like an embed, plus the ids of
/// the backing files (resolved to URLs via `getSignedFileUrls`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<EmbedFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<EmbedProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

/// Attached file block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FileProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<RichText>,
}

/// Web bookmark with scraped metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BookmarkProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<BookmarkFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmarkProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<RichText>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmarkFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark_cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark_icon: Option<String>,
}

/// A block type this client does not have a variant for yet.
///
/// Keeps the tag, the common fields, the child list, and the raw
/// `properties`/`format` payloads so unknown containers still
/// participate in tree assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<BlockId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Value>,
}
