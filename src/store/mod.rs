//! Document store: fetch coordination and per-id caching
//!
//! One shared, replayable future per document id. The first request for an
//! id creates the fetch-and-transform computation; every concurrent or
//! later request observes that same latched result. Entries live for the
//! process lifetime and are only removed by the generic-error recovery
//! branch, so a failed fetch is retried while a not-found result stays
//! cached.
//!
//! The store never fails outward: every request resolves to some
//! `Document`, falling back to the not-found or fetching-error documents.

mod recovery;

use crate::document::{Document, DocumentId};
use crate::error::{DocdexError, DocdexResult};
use crate::render::MarkupRenderer;
use crate::resolver::Resolver;
use crate::transport::DocumentTransport;
use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// A latched document computation, replayed to past and future subscribers
pub type SharedDocument = Shared<BoxFuture<'static, Document>>;

/// Fetch coordinator and document cache
pub struct DocumentStore {
    resolver: Resolver,
    transport: Arc<dyn DocumentTransport>,
    renderer: Arc<dyn MarkupRenderer>,
    cache: Mutex<HashMap<DocumentId, SharedDocument>>,
}

impl DocumentStore {
    /// Create a store over the given resolver and collaborators
    pub fn new(
        resolver: Resolver,
        transport: Arc<dyn DocumentTransport>,
        renderer: Arc<dyn MarkupRenderer>,
    ) -> Arc<Self> {
        Arc::new(Self {
            resolver,
            transport,
            renderer,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Get the shared document future for a navigation path.
    ///
    /// At most one underlying fetch is ever issued per id; concurrent
    /// callers receive clones of the same future. Must be called from
    /// within a tokio runtime: a clone of each new entry is spawned so an
    /// abandoned subscription still completes and populates the cache.
    pub fn get_document(self: &Arc<Self>, path: &str) -> SharedDocument {
        let id = self.resolver.resolve(path).id;

        let mut cache = self.cache.lock().expect("cache mutex poisoned");
        if let Some(entry) = cache.get(&id) {
            debug!("cache hit for document {}", id);
            return entry.clone();
        }

        info!("fetching document {}", id);
        let entry: SharedDocument = {
            let store = Arc::clone(self);
            let id = id.clone();
            async move { store.fetch_document(id).await }.boxed().shared()
        };
        cache.insert(id, entry.clone());
        drop(cache);

        // Drive the fetch to completion even if every subscriber drops
        tokio::spawn(entry.clone());
        entry
    }

    /// Fetch-and-transform pipeline for one id. Always terminates with a
    /// document; failures are routed through the recovery branches.
    async fn fetch_document(self: Arc<Self>, id: DocumentId) -> Document {
        let source_path = self.resolver.source_path(&id);
        debug!("resolved document {} to source {}", id, source_path);

        match self.transport.get(&source_path).await {
            Ok(raw) => match self.transform(&id, &raw) {
                Ok(doc) => doc,
                Err(e) => recovery::recover_generic(&self, &id, &e),
            },
            Err(e) if e.is_not_found() => {
                debug!("source {} missing: {}", source_path, e);
                recovery::recover_not_found(&self, &id).await
            }
            Err(e) => recovery::recover_generic(&self, &id, &e),
        }
    }

    /// Transform raw fetched text into a document
    fn transform(&self, id: &str, raw: &str) -> DocdexResult<Document> {
        match self.renderer.compile(raw) {
            Some(contents) => Ok(Document::new(id, contents)),
            None => Err(DocdexError::transform(id, "renderer produced no output")),
        }
    }

    /// Remove a cached entry so the next request retries the fetch.
    /// Only the generic-error recovery branch calls this.
    fn evict(&self, id: &str) {
        self.cache.lock().expect("cache mutex poisoned").remove(id);
    }
}
