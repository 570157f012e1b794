//! CLI command implementations

pub mod config;
pub mod fetch;
pub mod follow;

pub use config::execute as config;
pub use fetch::execute as fetch;
pub use follow::execute as follow;

use crate::config::Config;
use crate::render::CmarkRenderer;
use crate::store::DocumentStore;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Build a document store wired to the HTTP transport and markdown
/// renderer, with an optional base-href override from the CLI
pub(crate) fn build_store(config: &Config, base_override: Option<String>) -> Arc<DocumentStore> {
    let mut config = config.clone();
    if let Some(base) = base_override {
        config.site.base_href = base;
    }

    DocumentStore::new(
        config.resolver(),
        Arc::new(HttpTransport::new(config.site.timeout_secs)),
        Arc::new(CmarkRenderer::new()),
    )
}
