// src/model/collection.rs
//! Collections (databases), their schemas, and saved views.

use super::text::RichText;
use crate::types::{BlockId, CollectionId, CollectionViewId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A collection record: the schema plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionValue {
    pub id: CollectionId,
    #[serde(default)]
    pub version: u64,
    #[serde(default = "crate::model::default_true")]
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_table: Option<String>,
    /// Field descriptors keyed by the schema key (a short opaque string).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schema: IndexMap<String, SchemaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<CollectionFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

/// Field descriptor in a collection's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// The stored field name — also the key rows file their raw cells
    /// under.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Only present when `kind` is a date flavor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

/// The value kinds a schema field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Title,
    Text,
    Number,
    Checkbox,
    Select,
    MultiSelect,
    Date,
    Person,
    File,
    Url,
    Email,
    PhoneNumber,
    Formula,
    Relation,
    Rollup,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
    /// A kind this client does not recognize yet.
    #[serde(other)]
    Unknown,
}

/// One choice of a select/multi-select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_cover_position: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection_page_properties: Vec<PropertyVisibility>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyVisibility {
    pub visible: bool,
    pub property: String,
}

/// A saved view over a collection: row order plus query settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionViewValue {
    pub id: CollectionViewId,
    #[serde(default)]
    pub version: u64,
    #[serde(default = "crate::model::default_true")]
    pub alive: bool,
    #[serde(rename = "type")]
    pub kind: CollectionViewKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_table: Option<String>,
    /// Row ids in the view's declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_sort: Vec<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<CollectionQuery>,
    /// View formatting is layout-specific and passes through untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionViewKind {
    Table,
    List,
    Board,
    Gallery,
    Calendar,
    #[serde(other)]
    Unknown,
}

/// Filter/sort/aggregate description a view carries and queries echo.
///
/// The clause fields are pass-through payloads; the server interprets
/// them, the client only round-trips them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionQuery {
    #[serde(default)]
    pub filter_operator: FilterOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<FilterClause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortClause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregate: Vec<AggregateClause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub id: String,
    pub comparator: String,
    pub property: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortClause {
    pub id: String,
    pub property: String,
    pub direction: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateClause {
    pub id: String,
    pub property: String,
    pub aggregation_type: String,
    pub view_type: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_field_kinds_parse() {
        let field: SchemaField =
            serde_json::from_value(json!({"name": "Status", "type": "text"})).unwrap();
        assert_eq!(field.kind, SchemaKind::Text);

        let field: SchemaField =
            serde_json::from_value(json!({"name": "X", "type": "not_a_kind_yet"})).unwrap();
        assert_eq!(field.kind, SchemaKind::Unknown);
    }

    #[test]
    fn test_view_defaults_tolerate_sparse_records() {
        let view: CollectionViewValue = serde_json::from_value(json!({
            "id": "97f6f9e9-9999-4c9a-8888-777766665555",
            "type": "table"
        }))
        .unwrap();
        assert!(view.alive);
        assert!(view.page_sort.is_empty());
        assert!(view.query.is_none());
    }
}
