//! Autocomplete suggestions for the catalog search box.

use std::collections::HashSet;

use crate::catalog::Catalog;

/// Minimum partial-query length before suggestions activate. Shorter
/// inputs always yield an empty list.
pub const MIN_PARTIAL_LEN: usize = 2;

/// Suggest up to `max` candidate strings for a partial query.
///
/// Candidates are drawn from destination names, locations, and every
/// highlight tag, each matched case-insensitively as a substring. The
/// result keeps first-discovered order: destinations are scanned in
/// collection order, and within a destination the name is checked
/// before the location before the highlights. Duplicates (the same
/// tag on several destinations) appear once.
pub fn suggestions(catalog: &Catalog, partial: &str, max: usize) -> Vec<String> {
    if partial.chars().count() < MIN_PARTIAL_LEN || max == 0 {
        return Vec::new();
    }

    let needle = partial.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for destination in catalog.destinations() {
        offer(&mut out, &mut seen, &destination.name, &needle, max);
        offer(&mut out, &mut seen, &destination.location, &needle, max);
        for highlight in &destination.highlights {
            offer(&mut out, &mut seen, highlight, &needle, max);
        }

        if out.len() >= max {
            break;
        }
    }

    out
}

fn offer<'a>(
    out: &mut Vec<String>,
    seen: &mut HashSet<&'a str>,
    candidate: &'a str,
    needle: &str,
    max: usize,
) {
    if out.len() >= max {
        return;
    }
    if !candidate.to_lowercase().contains(needle) {
        return;
    }
    if seen.insert(candidate) {
        out.push(candidate.to_string());
    }
}
