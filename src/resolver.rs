//! Identifier resolution
//!
//! Maps a raw navigation path to a canonical document id and the source
//! document it is fetched from, applying two fixed substitution rules:
//! 1. Alias table: section ids that map to that section's index document
//! 2. Placeholder set: ids that all share one placeholder source document
//!
//! Resolution is pure and deterministic; no IO, no errors.

use crate::document::DocumentId;
use std::collections::{HashMap, HashSet};

/// Id assigned to the empty navigation path
pub const INDEX_ID: &str = "index";

/// Shared source document for every placeholder id
pub const PLACEHOLDER_DOC: &str = "placeholder";

/// Outcome of resolving a navigation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical document id (cache key)
    pub id: DocumentId,
    /// Source document name used for retrieval
    pub source_doc: String,
}

/// Pure path-to-source resolver, fixed at construction time
#[derive(Debug, Clone)]
pub struct Resolver {
    base_href: String,
    content_prefix: String,
    aliases: HashMap<String, String>,
    placeholders: HashSet<String>,
}

impl Resolver {
    /// Create a resolver with the given base href, content prefix,
    /// alias table and placeholder set
    pub fn new(
        base_href: impl Into<String>,
        content_prefix: impl Into<String>,
        aliases: HashMap<String, String>,
        placeholders: HashSet<String>,
    ) -> Self {
        Self {
            base_href: base_href.into(),
            content_prefix: content_prefix.into(),
            aliases,
            placeholders,
        }
    }

    /// Resolve a navigation path to a canonical id and source document
    pub fn resolve(&self, path: &str) -> Resolution {
        let id = Self::canonical_id(path);
        let source_doc = self.source_doc_for(&id);
        Resolution { id, source_doc }
    }

    /// Derive the content source path for an id.
    ///
    /// Recomputed on every fetch rather than stored; the alias and
    /// placeholder rules are re-applied to the id itself.
    pub fn source_path(&self, id: &str) -> String {
        format!(
            "{}{}{}.md",
            self.base_href,
            self.content_prefix,
            self.source_doc_for(id)
        )
    }

    /// Canonical id for a raw navigation path: strip a leading slash,
    /// empty maps to the reserved index id
    fn canonical_id(path: &str) -> DocumentId {
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            INDEX_ID.to_string()
        } else {
            path.to_string()
        }
    }

    /// Apply alias and placeholder substitution to an id
    fn source_doc_for(&self, id: &str) -> String {
        if let Some(alias) = self.aliases.get(id) {
            alias.clone()
        } else if self.placeholders.contains(id) {
            PLACEHOLDER_DOC.to_string()
        } else {
            id.to_string()
        }
    }
}
