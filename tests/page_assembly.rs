// tests/page_assembly.rs
//! Pagination and tree assembly driven through a scripted record source.

use std::sync::Mutex;

use notion3::{
    build_block_tree, load_block_tree, load_full_page_chunk, BlockCommon, BlockId, BlockValue,
    ClientError, Cursor, CursorStack, PageBlock, PageChunkRequest, PageChunkResponse,
    QueryCollectionRequest, QueryCollectionResponse, Record, RecordMap, RecordSource, Role,
    PAGE_CHUNK_LIMIT,
};
use pretty_assertions::assert_eq;

/// Replays a fixed sequence of page-chunk responses and records every
/// request it saw.
struct ScriptedSource {
    chunks: Mutex<Vec<PageChunkResponse>>,
    requests: Mutex<Vec<PageChunkRequest>>,
}

impl ScriptedSource {
    fn new(chunks: Vec<PageChunkResponse>) -> Self {
        Self {
            chunks: Mutex::new(chunks),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<PageChunkRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordSource for ScriptedSource {
    async fn load_page_chunk(
        &self,
        request: &PageChunkRequest,
    ) -> Result<PageChunkResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut chunks = self.chunks.lock().unwrap();
        assert!(!chunks.is_empty(), "fetched past the scripted responses");
        Ok(chunks.remove(0))
    }

    async fn query_collection(
        &self,
        _request: &QueryCollectionRequest,
    ) -> Result<QueryCollectionResponse, ClientError> {
        unreachable!("these tests never query collections")
    }
}

/// Always fails with a service error, standing in for a broken server.
struct FailingSource;

#[async_trait::async_trait]
impl RecordSource for FailingSource {
    async fn load_page_chunk(
        &self,
        _request: &PageChunkRequest,
    ) -> Result<PageChunkResponse, ClientError> {
        Err(ClientError::Service {
            endpoint: "loadPageChunk".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream unavailable".to_string(),
        })
    }

    async fn query_collection(
        &self,
        _request: &QueryCollectionRequest,
    ) -> Result<QueryCollectionResponse, ClientError> {
        unreachable!("these tests never query collections")
    }
}

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

fn chunk(blocks: Vec<(BlockId, Record<BlockValue>)>, cursor: Option<CursorStack>) -> PageChunkResponse {
    PageChunkResponse {
        cursor,
        record_map: RecordMap {
            block: if blocks.is_empty() {
                None
            } else {
                Some(blocks.into_iter().collect())
            },
            ..RecordMap::default()
        },
    }
}

fn more_after(id: &BlockId, index: i64) -> Option<CursorStack> {
    Some(CursorStack {
        stack: vec![Cursor {
            id: id.clone(),
            table: "block".to_string(),
            index,
        }],
    })
}

#[tokio::test]
async fn issues_one_fetch_per_cursor_plus_the_terminal_one() {
    let root = bid(1);
    let source = ScriptedSource::new(vec![
        chunk(vec![(root.clone(), page(&root, None))], more_after(&root, 1)),
        chunk(vec![(bid(2), page(&bid(2), None))], more_after(&root, 2)),
        chunk(vec![(bid(3), page(&bid(3), None))], Some(CursorStack::default())),
    ]);

    let assembled = load_full_page_chunk(&source, root.clone(), PAGE_CHUNK_LIMIT)
        .await
        .unwrap();

    // Two non-empty cursor stacks were returned, so k + 1 = 3 fetches.
    let requests = source.requests();
    assert_eq!(requests.len(), 3);

    // Chunk numbers advance while the page id and limit stay fixed.
    let numbers: Vec<u32> = requests.iter().map(|r| r.chunk_number).collect();
    assert_eq!(numbers, [0, 1, 2]);
    assert!(requests.iter().all(|r| r.page_id == root));
    assert!(requests.iter().all(|r| r.limit == PAGE_CHUNK_LIMIT));

    // Each response cursor was echoed back verbatim.
    assert_eq!(requests[0].cursor, CursorStack::default());
    assert_eq!(Some(requests[1].cursor.clone()), more_after(&root, 1));
    assert_eq!(Some(requests[2].cursor.clone()), more_after(&root, 2));

    // The assembled result holds every record and the terminal cursor.
    let blocks = assembled.record_map.block.as_ref().unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(assembled.cursor, Some(CursorStack::default()));
    assert!(!assembled.has_more());
}

#[tokio::test]
async fn an_absent_cursor_terminates_like_an_empty_stack() {
    let root = bid(1);
    let source = ScriptedSource::new(vec![chunk(
        vec![(root.clone(), page(&root, None))],
        None,
    )]);

    let assembled = load_full_page_chunk(&source, root, PAGE_CHUNK_LIMIT)
        .await
        .unwrap();

    assert_eq!(source.requests().len(), 1);
    assert_eq!(assembled.cursor, Some(CursorStack::default()));
}

#[tokio::test]
async fn the_first_chunk_wins_for_records_seen_twice() {
    let root = bid(1);
    let child = bid(2);
    let source = ScriptedSource::new(vec![
        chunk(
            vec![(root.clone(), page(&root, Some(vec![child.clone()])))],
            more_after(&root, 1),
        ),
        // The same root id reappears with different content; it must lose.
        chunk(
            vec![
                (root.clone(), page(&root, None)),
                (child.clone(), page(&child, None)),
            ],
            Some(CursorStack::default()),
        ),
    ]);

    let assembled = load_full_page_chunk(&source, root.clone(), PAGE_CHUNK_LIMIT)
        .await
        .unwrap();

    let blocks = assembled.record_map.block.as_ref().unwrap();
    assert_eq!(
        blocks[&root].value.content(),
        Some(std::slice::from_ref(&child))
    );
}

#[tokio::test]
async fn transport_failures_propagate_unmodified() {
    let err = load_full_page_chunk(&FailingSource, bid(1), PAGE_CHUNK_LIMIT)
        .await
        .unwrap_err();
    assert!(matches!(
        &err,
        ClientError::Service { endpoint, .. } if endpoint.as_str() == "loadPageChunk"
    ));
    assert!(err.is_remote());
}

#[tokio::test]
async fn load_block_tree_assembles_across_chunk_boundaries() {
    let root = bid(1);
    let (left, right, grandchild) = (bid(2), bid(3), bid(4));
    let source = ScriptedSource::new(vec![
        chunk(
            vec![(
                root.clone(),
                page(&root, Some(vec![left.clone(), right.clone()])),
            )],
            more_after(&root, 1),
        ),
        chunk(
            vec![
                (left.clone(), page(&left, Some(vec![grandchild.clone()]))),
                (grandchild.clone(), page(&grandchild, None)),
            ],
            more_after(&root, 2),
        ),
        chunk(
            vec![(right.clone(), page(&right, None))],
            Some(CursorStack::default()),
        ),
    ]);

    let tree = load_block_tree(&source, root.clone()).await.unwrap();

    assert_eq!(tree.value.value.id(), &root);
    let children = tree.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].value.value.id(), &left);
    assert_eq!(children[1].value.value.id(), &right);
    assert_eq!(children[0].children()[0].value.value.id(), &grandchild);
    assert_eq!(children[1].children, None);
}

#[tokio::test]
async fn load_block_tree_fails_when_the_page_never_appears() {
    // The server answered, but without the requested page's record.
    let stray = bid(7);
    let source = ScriptedSource::new(vec![chunk(
        vec![(stray.clone(), page(&stray, None))],
        Some(CursorStack::default()),
    )]);

    let err = load_block_tree(&source, bid(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingRoot(_)));
}

#[test]
fn the_documented_compaction_scenario_holds() {
    // RecordSet {block: {A: content [B, C], B: content [], C: {}}},
    // root A → {A, children: [{B, None}, {C, None}]}.
    let (a, b, c) = (bid(0xa), bid(0xb), bid(0xc));
    let map = RecordMap {
        block: Some(
            vec![
                (a.clone(), page(&a, Some(vec![b.clone(), c.clone()]))),
                (b.clone(), page(&b, Some(Vec::new()))),
                (c.clone(), page(&c, None)),
            ]
            .into_iter()
            .collect(),
        ),
        ..RecordMap::default()
    };

    let tree = build_block_tree(&map, &a).unwrap();
    let children = tree.children.as_ref().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].value.value.id(), &b);
    assert_eq!(children[0].children, None);
    assert_eq!(children[1].value.value.id(), &c);
    assert_eq!(children[1].children, None);
}
