// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! them should tell you how the client paginates: how much it asks for
//! per chunk, and the stride the backend pages collections in.

// ---------------------------------------------------------------------------
// v3 API boundaries
// ---------------------------------------------------------------------------

/// How many records `loadPageChunk` is asked for per request.
///
/// 50 is what the Notion web client itself sends; the server treats it
/// as a hint and may return fewer or more records per chunk.
pub const PAGE_CHUNK_LIMIT: u32 = 50;

/// Server-side page stride for collection queries.
///
/// The v3 backend materializes collection results in fixed chunks of 70
/// rows. When a query reports more rows than were requested, the limit
/// is widened to the next multiple of this stride so a single follow-up
/// request covers the whole collection.
pub const COLLECTION_PAGE_STRIDE: u32 = 70;

/// Default `userLocale` sent with collection loaders.
pub const DEFAULT_USER_LOCALE: &str = "en";

/// Default `userTimeZone` sent with collection loaders.
///
/// Only affects how the server renders date formulas; any IANA zone
/// name is accepted.
pub const DEFAULT_USER_TIME_ZONE: &str = "America/New_York";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing response bodies in errors.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
