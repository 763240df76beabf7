use thiserror::Error;

/// Top-level error type for lingua resolution calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinguaError {
    /// Neither the requested nor the default locale exists in the catalog.
    #[error("locale '{requested}' not found (default '{default}' also missing)")]
    LocaleNotFound { requested: String, default: String },

    /// A key-path segment was missing, or traversal hit a leaf with segments
    /// remaining.
    #[error("key '{key}' not found for locale '{locale}'")]
    KeyPathNotFound { key: String, locale: String },

    /// The resolved node cannot produce a string where one is required.
    #[error("invalid node at '{key}': {reason}")]
    InvalidNode { key: String, reason: String },

    /// The catalog input did not have the locale → mapping shape.
    #[error("catalog shape error: {0}")]
    Shape(String),
}
