//! Read-only query operations over a loaded catalog.
//!
//! This module hosts the "query as a function" API consumed by the
//! presentation layer: filtering, sorting, and flattening in
//! [`engine`], and autocomplete in [`suggest`].

pub mod engine;
pub mod suggest;
