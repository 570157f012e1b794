//! Document value types and reserved identifiers

use std::fmt;

/// Canonical key for a document, derived from a navigation path
pub type DocumentId = String;

/// Reserved id served when a source document does not exist
pub const FILE_NOT_FOUND_ID: &str = "file-not-found";

/// Reserved id served when fetching or transforming fails
pub const FETCHING_ERROR_ID: &str = "fetching-error";

/// Body of the built-in not-found fallback document
pub const NOT_FOUND_CONTENTS: &str = "Document not found";

/// A fetched and rendered document. Immutable once produced; clones are
/// handed to every subscriber of the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Canonical document id
    pub id: DocumentId,
    /// Rendered markup
    pub contents: String,
}

impl Document {
    /// Create a document from an id and rendered contents
    pub fn new(id: impl Into<DocumentId>, contents: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            contents: contents.into(),
        }
    }

    /// The built-in not-found fallback document
    pub fn not_found() -> Self {
        Self::new(FILE_NOT_FOUND_ID, NOT_FOUND_CONTENTS)
    }

    /// The fetching-error fallback document for a requested location
    pub fn fetching_error(path: &str) -> Self {
        Self::new(FETCHING_ERROR_ID, fetching_error_contents(path))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contents)
    }
}

/// Fixed fetching-error markup, referencing the requested location
pub fn fetching_error_contents(path: &str) -> String {
    format!(
        "<div class=\"nf-container\">\n\
         <h1>Request for document failed.</h1>\n\
         <p>We are unable to retrieve \"{}\" at this time.<br>\n\
         Please check your connection and try again later.</p>\n\
         </div>",
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_document() {
        let doc = Document::not_found();
        assert_eq!(doc.id, FILE_NOT_FOUND_ID);
        assert_eq!(doc.contents, "Document not found");
    }

    #[test]
    fn fetching_error_references_location() {
        let doc = Document::fetching_error("guide/store");
        assert_eq!(doc.id, FETCHING_ERROR_ID);
        assert!(doc.contents.contains("guide/store"));
        assert!(doc.contents.contains("unable to retrieve"));
    }

    #[test]
    fn display_prints_contents() {
        let doc = Document::new("index", "<h1>Hello</h1>");
        assert_eq!(doc.to_string(), "<h1>Hello</h1>");
    }
}
