//! Docdex - documentation page fetcher
//!
//! Resolves navigation paths to document sources, fetches and renders
//! them, and memoizes every resolved document behind shared futures.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod feed;
pub mod render;
pub mod resolver;
pub mod store;
pub mod transport;

pub use document::{Document, DocumentId, FETCHING_ERROR_ID, FILE_NOT_FOUND_ID};
pub use error::{DocdexError, DocdexResult};
pub use store::DocumentStore;
