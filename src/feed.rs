//! Document feed: the document for the current navigation location
//!
//! Subscribes to a watch channel of navigation paths and republishes the
//! resolved document for the most recent path. Switches rather than
//! merges: when a newer path arrives before the previous fetch completes,
//! the stale subscription is dropped and its result is never emitted. The
//! underlying fetch is not aborted; the store's driver task completes it
//! and the cache keeps the entry.

use crate::document::Document;
use crate::store::DocumentStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Follow the navigation signal, emitting the document for each path.
///
/// The returned receiver starts at `None` and holds the most recently
/// resolved document. The feed ends when the navigation sender or every
/// document receiver is dropped; a fetch still in flight when navigation
/// closes is published before the feed stops.
pub fn follow(
    store: Arc<DocumentStore>,
    mut paths: watch::Receiver<String>,
) -> watch::Receiver<Option<Document>> {
    let (tx, rx) = watch::channel(None);

    tokio::spawn(async move {
        loop {
            let path = paths.borrow_and_update().clone();
            debug!("navigation changed to {:?}", path);
            let mut pending = store.get_document(&path);

            tokio::select! {
                doc = &mut pending => {
                    if tx.send(Some(doc)).is_err() {
                        break;
                    }
                    if paths.changed().await.is_err() {
                        break;
                    }
                }
                changed = paths.changed() => {
                    if changed.is_err() {
                        // Navigation ended: publish the in-flight
                        // document, then stop
                        let doc = pending.await;
                        let _ = tx.send(Some(doc));
                        break;
                    }
                    // Superseded before completion; the stale
                    // subscription is dropped without emitting
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DocdexError, DocdexResult};
    use crate::render::MarkupRenderer;
    use crate::resolver::Resolver;
    use crate::transport::DocumentTransport;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Transport that blocks selected paths on a notify gate and records
    /// every request
    struct GatedTransport {
        gated: HashSet<String>,
        gate: Notify,
        log: Mutex<Vec<String>>,
    }

    impl GatedTransport {
        fn new(gated: &[&str]) -> Self {
            Self {
                gated: gated.iter().map(|s| s.to_string()).collect(),
                gate: Notify::new(),
                log: Mutex::new(Vec::new()),
            }
        }

        fn saw(&self, path: &str) -> bool {
            self.log.lock().unwrap().iter().any(|p| p == path)
        }

        fn calls(&self, path: &str) -> usize {
            self.log
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.as_str() == path)
                .count()
        }
    }

    #[async_trait]
    impl DocumentTransport for GatedTransport {
        async fn get(&self, path: &str) -> DocdexResult<String> {
            self.log.lock().unwrap().push(path.to_string());
            if self.gated.contains(path) {
                self.gate.notified().await;
            }
            if path.ends_with("file-not-found.md") {
                return Err(DocdexError::NotFound {
                    path: path.to_string(),
                });
            }
            Ok(format!("body of {}", path))
        }
    }

    struct RawRenderer;

    impl MarkupRenderer for RawRenderer {
        fn compile(&self, raw: &str) -> Option<String> {
            Some(raw.to_string())
        }
    }

    fn feed_store(transport: Arc<GatedTransport>) -> Arc<DocumentStore> {
        let resolver = Resolver::new("", "content/docs/", HashMap::new(), HashSet::new());
        DocumentStore::new(resolver, transport, Arc::new(RawRenderer))
    }

    async fn wait_for(transport: &GatedTransport, path: &str) {
        for _ in 0..200 {
            if transport.saw(path) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("transport never saw {}", path);
    }

    #[tokio::test]
    async fn emits_document_for_initial_path() {
        let transport = Arc::new(GatedTransport::new(&[]));
        let store = feed_store(Arc::clone(&transport));
        let (_tx, paths) = watch::channel("guide/actions".to_string());

        let mut docs = follow(store, paths);
        docs.changed().await.unwrap();

        let doc = docs.borrow().clone().unwrap();
        assert_eq!(doc.id, "guide/actions");
        assert_eq!(doc.contents, "body of content/docs/guide/actions.md");
    }

    #[tokio::test]
    async fn superseded_path_is_never_emitted() {
        let transport = Arc::new(GatedTransport::new(&["content/docs/a.md"]));
        let store = feed_store(Arc::clone(&transport));
        let (tx, paths) = watch::channel("a".to_string());

        let mut docs = follow(store, paths);

        // Navigate away while "a" is still in flight
        wait_for(&transport, "content/docs/a.md").await;
        tx.send("b".to_string()).unwrap();

        docs.changed().await.unwrap();
        let doc = docs.borrow().clone().unwrap();
        assert_eq!(doc.id, "b");
    }

    #[tokio::test]
    async fn abandoned_fetch_is_served_from_cache_later() {
        let transport = Arc::new(GatedTransport::new(&["content/docs/a.md"]));
        let store = feed_store(Arc::clone(&transport));
        let (tx, paths) = watch::channel("a".to_string());

        let mut docs = follow(Arc::clone(&store), paths);
        wait_for(&transport, "content/docs/a.md").await;
        tx.send("b".to_string()).unwrap();
        docs.changed().await.unwrap();

        // Release the abandoned fetch; the store's driver finishes it
        transport.gate.notify_waiters();
        let doc = store.get_document("a").await;
        assert_eq!(doc.id, "a");
        assert_eq!(transport.calls("content/docs/a.md"), 1);
    }

    #[tokio::test]
    async fn navigating_back_replays_cached_document() {
        let transport = Arc::new(GatedTransport::new(&[]));
        let store = feed_store(Arc::clone(&transport));
        let (tx, paths) = watch::channel("a".to_string());

        let mut docs = follow(store, paths);
        docs.changed().await.unwrap();
        tx.send("b".to_string()).unwrap();
        docs.changed().await.unwrap();
        tx.send("a".to_string()).unwrap();
        docs.changed().await.unwrap();

        assert_eq!(docs.borrow().clone().unwrap().id, "a");
        assert_eq!(transport.calls("content/docs/a.md"), 1);
    }

    #[tokio::test]
    async fn navigation_close_flushes_in_flight_document() {
        let transport = Arc::new(GatedTransport::new(&["content/docs/a.md"]));
        let store = feed_store(Arc::clone(&transport));
        let (tx, paths) = watch::channel("a".to_string());

        let mut docs = follow(store, paths);
        wait_for(&transport, "content/docs/a.md").await;
        drop(tx);

        transport.gate.notify_waiters();
        docs.changed().await.unwrap();
        assert_eq!(docs.borrow().clone().unwrap().id, "a");
    }

    #[tokio::test]
    async fn feed_ends_when_navigation_closes() {
        let transport = Arc::new(GatedTransport::new(&[]));
        let store = feed_store(transport);
        let (tx, paths) = watch::channel(String::new());

        let mut docs = follow(store, paths);
        docs.changed().await.unwrap();
        drop(tx);

        // Sender gone: the feed stops publishing
        assert!(docs.changed().await.is_err());
        assert_eq!(docs.borrow().clone().unwrap().id, "index");
    }
}
