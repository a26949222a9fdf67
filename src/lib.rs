//! In-memory query engine for a SCUBA destination catalog.
//!
//! The crate holds an immutable collection of [`models::Destination`]
//! records (each embedding dive shops and boat excursions) and answers
//! three query shapes over it:
//!
//! - free-text search across name/location/highlight fields,
//! - multi-field exact-match filtering (difficulty, region,
//!   certification, duration, price bracket),
//! - stable comparator-based sorting by a chosen field,
//!
//! plus slug lookup, flattening projections that annotate shops and
//! excursions with their owning destination, and substring
//! autocomplete. Everything is synchronous and side-effect-free: the
//! catalog is loaded once (see [`Catalog`]) and queries are pure
//! functions over it, so shared references can serve any number of
//! concurrent readers without coordination.

pub mod catalog;
pub mod error;
pub mod models;
pub mod search;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
