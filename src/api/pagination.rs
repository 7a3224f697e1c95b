// src/api/pagination.rs
//! Serial page-chunk pagination.

use super::requests::PageChunkRequest;
use super::responses::PageChunkResponse;
use super::RecordSource;
use crate::error::ClientError;
use crate::model::{CursorStack, RecordMap};
use crate::types::BlockId;

/// Fetches every chunk of a page and merges the partials into one
/// record map.
///
/// Issues `loadPageChunk` with an advancing chunk number, echoing each
/// response cursor back verbatim, until the server returns an absent or
/// empty-stack cursor — both mean "no more pages". The merged map keeps
/// the first-seen record for every id (earlier chunks win), and the
/// returned cursor is always the exhausted empty stack.
///
/// Pagination is strictly serial: each request depends on the previous
/// response's cursor, so there is nothing to fan out. Transport failures
/// propagate unmodified and nothing partial is ever returned. The chunk
/// count is unbounded — termination is the server's obligation, and a
/// server that never empties the stack keeps this loop running.
pub async fn load_full_page_chunk<S>(
    source: &S,
    page_id: BlockId,
    limit: u32,
) -> Result<PageChunkResponse, ClientError>
where
    S: RecordSource + ?Sized,
{
    let mut request = PageChunkRequest::initial(page_id, limit);
    let mut partials = Vec::new();

    loop {
        let response = source.load_page_chunk(&request).await?;
        let cursor = response.cursor.clone().unwrap_or_default();
        partials.push(response.record_map);

        if cursor.is_exhausted() {
            break;
        }
        request = request.next(cursor);
    }

    log::debug!(
        "assembled page {} from {} chunk(s)",
        request.page_id,
        partials.len()
    );

    Ok(PageChunkResponse {
        cursor: Some(CursorStack::default()),
        record_map: RecordMap::merge(partials),
    })
}
