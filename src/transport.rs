//! Transport abstraction for retrieving raw document text
//!
//! The store talks to a trait so tests (and alternative backends) can
//! substitute the HTTP client. The transport must report not-found
//! separately from every other failure; the store's recovery policy
//! branches on that distinction.

use crate::error::{DocdexError, DocdexResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Abstract text retrieval interface
#[async_trait]
pub trait DocumentTransport: Send + Sync {
    /// Fetch the raw text at a content source path.
    ///
    /// Returns `DocdexError::NotFound` for a 404-equivalent status and
    /// `DocdexError::Transport` for any other failure.
    async fn get(&self, path: &str) -> DocdexResult<String>;
}

/// HTTP transport backed by a blocking ureq agent.
///
/// ureq calls run on the blocking thread pool; the store only ever sees
/// the async trait surface.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport with a global request timeout
    pub fn new(timeout_secs: u64) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build()
            .new_agent();
        Self { agent }
    }

    fn fetch_blocking(agent: &ureq::Agent, path: &str) -> DocdexResult<String> {
        match agent.get(path).call() {
            Ok(mut response) => response
                .body_mut()
                .read_to_string()
                .map_err(|e| DocdexError::transport(path, format!("reading body: {}", e))),
            Err(ureq::Error::StatusCode(code)) => Err(classify_status(path, code)),
            Err(e) => Err(DocdexError::transport(path, e.to_string())),
        }
    }
}

#[async_trait]
impl DocumentTransport for HttpTransport {
    async fn get(&self, path: &str) -> DocdexResult<String> {
        debug!("GET {}", path);
        let agent = self.agent.clone();
        let path = path.to_string();

        tokio::task::spawn_blocking(move || Self::fetch_blocking(&agent, &path))
            .await
            .map_err(|e| DocdexError::Internal(format!("transport task failed: {}", e)))?
    }
}

/// Map an HTTP status code to the error taxonomy
fn classify_status(path: &str, code: u16) -> DocdexError {
    if code == 404 {
        DocdexError::NotFound {
            path: path.to_string(),
        }
    } else {
        DocdexError::transport(path, format!("HTTP status {}", code))
    }
}
