//! Catalog construction, validation, and slug lookup.
//!
//! A [`Catalog`] is loaded once at process start and never mutated.
//! Every constructor funnels through the same invariant checks, so any
//! catalog a query sees is known to have unique slugs and in-range
//! ratings. Shared references to a catalog are safe to hand to
//! concurrent readers; there is no interior mutability.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::Destination;

/// The six-destination dataset shipped with this repository, embedded
/// at compile time and parsed on first use.
static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json_str(include_str!("../../data/destinations.json"))
        .expect("embedded destination dataset must be valid")
});

/// An immutable collection of destinations.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build a catalog from destination records, validating invariants.
    ///
    /// Fails when two destinations share a slug or when a destination
    /// or shop rating falls outside [0, 5].
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        let mut slugs = HashSet::new();
        for destination in &destinations {
            if !slugs.insert(destination.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: destination.slug.clone(),
                });
            }

            check_rating(&destination.name, destination.rating)?;
            for shop in &destination.dive_shops {
                check_rating(&shop.name, shop.rating)?;
            }
        }

        debug!(destinations = destinations.len(), "catalog loaded");
        Ok(Self { destinations })
    }

    /// Parse a catalog from a JSON array of destinations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    /// Parse a catalog from any reader yielding the same JSON shape.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_reader(reader)?;
        Self::new(destinations)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The dataset bundled with this crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All destinations in load order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Look up a destination by its unique slug.
    ///
    /// A miss is a normal outcome (unknown URLs reach this path) and
    /// surfaces as [`CatalogError::UnknownSlug`] for the caller to
    /// render as a not-found state.
    pub fn lookup_by_slug(&self, slug: &str) -> Result<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.slug == slug)
            .ok_or_else(|| CatalogError::UnknownSlug {
                slug: slug.to_string(),
            })
    }

    /// Distinct destination locations in first-discovered order, used
    /// to populate region filter options.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.destinations
            .iter()
            .map(|d| d.location.as_str())
            .filter(|location| seen.insert(*location))
            .collect()
    }
}

fn check_rating(name: &str, rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogError::RatingOutOfRange {
            name: name.to_string(),
            rating,
        });
    }
    Ok(())
}
