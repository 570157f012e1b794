//! Error recovery branches for the document store
//!
//! Two independent fallbacks: a missing source document redirects to the
//! cached not-found document, while any other failure synthesizes a fresh
//! fetching-error document and evicts the id so the next request retries.

use super::DocumentStore;
use crate::document::{Document, FILE_NOT_FOUND_ID};
use crate::error::DocdexError;
use std::sync::Arc;
use tracing::{error, warn};

/// Not-found branch: serve the not-found document, fetching and caching it
/// under its own id on first use.
///
/// When the not-found document itself is the one missing, short-circuit to
/// the built-in fallback instead of recursing.
pub(super) async fn recover_not_found(store: &Arc<DocumentStore>, id: &str) -> Document {
    warn!("document {} not found", id);
    if id == FILE_NOT_FOUND_ID {
        return Document::not_found();
    }
    store.get_document(FILE_NOT_FOUND_ID).await
}

/// Generic-error branch: evict the id so a later request retries, and
/// synthesize a fetching-error document naming the requested location.
pub(super) fn recover_generic(store: &DocumentStore, id: &str, error: &DocdexError) -> Document {
    error!("error fetching document {}: {}", id, error);
    store.evict(id);
    Document::fetching_error(id)
}
