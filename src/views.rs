// src/views.rs
//! Flattens a collection view into typed rows.

use crate::api::{QueryCollectionRequest, RecordSource};
use crate::constants::COLLECTION_PAGE_STRIDE;
use crate::error::ClientError;
use crate::model::{BlockValue, Record, SchemaField};
use indexmap::IndexMap;
use serde_json::Value;

/// One projected cell: the raw stored value plus the schema field that
/// describes it.
///
/// The value stays untyped — its shape depends entirely on the field
/// kind, and interpreting it is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCell {
    pub value: Option<Value>,
    pub schema: SchemaField,
}

/// One row of a collection view, in the view's declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionItem {
    /// The row's page record, as stored in the block table.
    pub page: Record<BlockValue>,
    /// Cells keyed by the collection's schema key.
    pub properties: IndexMap<String, CollectionCell>,
}

/// Queries a collection view and projects every surviving row through
/// the collection's schema.
///
/// If the first response reports more rows than the requested limit,
/// the limit is widened to the next multiple of 70 — the stride the
/// backend pages collections in — and the query reissued exactly once.
/// However large the second response claims the collection is, there is
/// no third request.
///
/// Absence never fails here: a missing collection record, view record,
/// or block table yields an empty row list, and a `page_sort` id with
/// no block record is skipped.
pub async fn load_collection_items<S>(
    source: &S,
    mut request: QueryCollectionRequest,
) -> Result<Vec<CollectionItem>, ClientError>
where
    S: RecordSource + ?Sized,
{
    let mut response = source.query_collection(&request).await?;

    if response.result.total > request.loader.limit {
        let widened = widen_to_stride(response.result.total);
        log::info!(
            "collection {} holds {} rows, re-querying with limit {}",
            request.collection_id,
            response.result.total,
            widened
        );
        request.loader.limit = widened;
        response = source.query_collection(&request).await?;
    }

    let record_map = response.record_map;
    let Some(collection) = record_map
        .collection
        .as_ref()
        .and_then(|table| table.get(&request.collection_id))
    else {
        return Ok(Vec::new());
    };
    let Some(view) = record_map
        .collection_view
        .as_ref()
        .and_then(|table| table.get(&request.collection_view_id))
    else {
        return Ok(Vec::new());
    };
    let Some(blocks) = record_map.block.as_ref() else {
        return Ok(Vec::new());
    };

    let schema = &collection.value.schema;
    let items = view
        .value
        .page_sort
        .iter()
        .filter_map(|row_id| blocks.get(row_id))
        .map(|record| project_row(record, schema))
        .collect();
    Ok(items)
}

/// Projects one row's raw properties through the collection schema.
///
/// Output keys are the schema keys; values come from the raw property
/// map under each field's stored name. A row with no property payload
/// at all projects every field to `value: None`.
fn project_row(
    record: &Record<BlockValue>,
    schema: &IndexMap<String, SchemaField>,
) -> CollectionItem {
    let raw = record.value.row_properties();
    let properties = schema
        .iter()
        .map(|(key, field)| {
            let value = raw.and_then(|cells| cells.get(&field.name)).cloned();
            (
                key.clone(),
                CollectionCell {
                    value,
                    schema: field.clone(),
                },
            )
        })
        .collect();
    CollectionItem {
        page: record.clone(),
        properties,
    }
}

/// Rounds `total` up to the server's collection page stride.
fn widen_to_stride(total: u32) -> u32 {
    total.div_ceil(COLLECTION_PAGE_STRIDE) * COLLECTION_PAGE_STRIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_rounds_up_to_the_stride() {
        assert_eq!(widen_to_stride(1), 70);
        assert_eq!(widen_to_stride(45), 70);
        assert_eq!(widen_to_stride(70), 70);
        assert_eq!(widen_to_stride(71), 140);
        assert_eq!(widen_to_stride(500), 560);
    }
}
