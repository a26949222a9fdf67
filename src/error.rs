//! Error types for catalog construction and lookup.

use thiserror::Error;

/// Errors produced while building a catalog or looking up a record.
///
/// Query operations (filter, sort, search, autocomplete) are total and
/// never return an error; an empty result set is a normal outcome.
/// `UnknownSlug` is likewise an expected outcome for unknown URLs, not
/// a fault — callers are expected to render a not-found state.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No destination matches the requested slug.
    #[error("no destination with slug `{slug}`")]
    UnknownSlug { slug: String },

    /// Two destinations share a slug; slugs are the external lookup key
    /// and must be unique across the collection.
    #[error("duplicate destination slug `{slug}`")]
    DuplicateSlug { slug: String },

    /// A destination or dive shop carries a rating outside [0, 5].
    #[error("rating {rating} for `{name}` is outside the 0-5 range")]
    RatingOutOfRange { name: String, rating: f64 },

    /// Failed to read catalog data from a file.
    #[error("failed to read catalog data: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data was not valid JSON for the expected schema.
    #[error("failed to parse catalog data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
