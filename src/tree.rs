// src/tree.rs
//! Assembles a merged record map into a navigable block tree.

use crate::api::{load_full_page_chunk, RecordSource};
use crate::error::ClientError;
use crate::model::{BlockValue, Record, RecordMap, RecordTable};
use crate::types::BlockId;

/// A block and its resolved children, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub value: Record<BlockValue>,
    /// `None` whenever no child resolved — a leaf block, an empty
    /// `content` list, and a list of dangling references all look the
    /// same to callers.
    pub children: Option<Vec<BlockNode>>,
}

impl BlockNode {
    /// Child nodes, treating absent and empty alike.
    pub fn children(&self) -> &[BlockNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Builds the tree rooted at `root` from an assembled record map.
///
/// Children are resolved through each block's `content` list, keeping
/// its order. A child id with no record in the block table is dropped
/// silently rather than reported — dangling references are normal in
/// partially shared workspaces, and a compacted tree is the contract
/// here. Only the root is mandatory: an absent block table or an
/// unknown root id is an error.
///
/// The walk performs no cycle detection. The service does not emit
/// content cycles for live pages; a hand-built cyclic map fed into this
/// function will recurse without bound.
pub fn build_block_tree(record_map: &RecordMap, root: &BlockId) -> Result<BlockNode, ClientError> {
    let blocks = record_map
        .block
        .as_ref()
        .ok_or(ClientError::MissingBlockTable)?;
    resolve_node(blocks, root).ok_or_else(|| ClientError::MissingRoot(root.clone()))
}

fn resolve_node(blocks: &RecordTable<BlockId, BlockValue>, id: &BlockId) -> Option<BlockNode> {
    let record = blocks.get(id)?;
    let children = record.value.content().map(|ids| {
        ids.iter()
            .filter_map(|child| resolve_node(blocks, child))
            .collect::<Vec<_>>()
    });
    Some(BlockNode {
        value: record.clone(),
        children: children.filter(|nodes| !nodes.is_empty()),
    })
}

/// Fetches a page and assembles its block tree in one call.
pub async fn load_block_tree<S>(source: &S, page_id: BlockId) -> Result<BlockNode, ClientError>
where
    S: RecordSource + ?Sized,
{
    let limit = crate::constants::PAGE_CHUNK_LIMIT;
    let chunk = load_full_page_chunk(source, page_id.clone(), limit).await?;
    build_block_tree(&chunk.record_map, &page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::{BlockCommon, PageBlock};
    use crate::model::Role;

    fn bid(n: u32) -> BlockId {
        BlockId::parse(&format!("{:032x}", n)).unwrap()
    }

    fn page(id: &BlockId, content: Option<Vec<BlockId>>) -> Record<BlockValue> {
        Record {
            role: Role::Editor,
            value: BlockValue::Page(PageBlock {
                common: BlockCommon::new(id.clone()),
                content,
                properties: None,
                format: None,
                permissions: Vec::new(),
            }),
        }
    }

    fn map_of(entries: Vec<(BlockId, Record<BlockValue>)>) -> RecordMap {
        RecordMap {
            block: Some(entries.into_iter().collect()),
            ..RecordMap::default()
        }
    }

    #[test]
    fn test_children_keep_content_order_and_collapse_to_none() {
        let (a, b, c) = (bid(1), bid(2), bid(3));
        let map = map_of(vec![
            (a.clone(), page(&a, Some(vec![b.clone(), c.clone()]))),
            (b.clone(), page(&b, Some(Vec::new()))),
            (c.clone(), page(&c, None)),
        ]);

        let tree = build_block_tree(&map, &a).unwrap();
        let children = tree.children.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].value.value.id(), &b);
        assert_eq!(children[1].value.value.id(), &c);
        // Empty content and absent content both come out as None.
        assert_eq!(children[0].children, None);
        assert_eq!(children[1].children, None);
    }

    #[test]
    fn test_dangling_children_are_dropped_silently() {
        let (root, kept, missing) = (bid(1), bid(2), bid(3));
        let map = map_of(vec![
            (
                root.clone(),
                page(&root, Some(vec![missing.clone(), kept.clone()])),
            ),
            (kept.clone(), page(&kept, None)),
        ]);

        let tree = build_block_tree(&map, &root).unwrap();
        assert_eq!(tree.children().len(), 1);
        assert_eq!(tree.children()[0].value.value.id(), &kept);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let a = bid(1);
        let map = map_of(vec![(a.clone(), page(&a, None))]);
        let err = build_block_tree(&map, &bid(9)).unwrap_err();
        assert!(matches!(err, ClientError::MissingRoot(_)));
    }

    #[test]
    fn test_absent_block_table_is_an_error() {
        let err = build_block_tree(&RecordMap::default(), &bid(1)).unwrap_err();
        assert!(matches!(err, ClientError::MissingBlockTable));
    }

    #[test]
    fn test_grandchildren_resolve_recursively() {
        let (a, b, c) = (bid(1), bid(2), bid(3));
        let map = map_of(vec![
            (a.clone(), page(&a, Some(vec![b.clone()]))),
            (b.clone(), page(&b, Some(vec![c.clone()]))),
            (c.clone(), page(&c, None)),
        ]);

        let tree = build_block_tree(&map, &a).unwrap();
        assert_eq!(tree.children()[0].children()[0].value.value.id(), &c);
    }
}
