//! Filter, sort, and flatten operations over the catalog.
//!
//! Every function here is a pure linear scan over the collection it is
//! given: predicates combine with logical AND, free-text search is
//! case-insensitive substring containment across a fixed field set
//! (no tokenization, no fuzzing), and all sorts are stable so equal
//! keys keep their prior relative order. Empty results are normal
//! outcomes, never errors.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{
    Destination, DestinationQuery, DestinationSort, ExcursionListing, ExcursionQuery,
    ExcursionSort, ShopListing, ShopQuery, ShopSort,
};

/// Case-insensitive substring containment. The needle is expected to
/// be lowercased once by the caller, per query rather than per record.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn cmp_name_ci(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Execute a destination query: filter, then optionally sort.
///
/// `search` matches against name OR location OR any highlight tag;
/// `difficulty` and `region` are exact matches against the difficulty
/// level and location field. Without a sort key, catalog order is
/// preserved.
pub fn run_destination_query<'a>(
    catalog: &'a Catalog,
    query: &DestinationQuery,
) -> Vec<&'a Destination> {
    let needle = query.search.to_lowercase();

    let mut results: Vec<&Destination> = catalog
        .destinations()
        .iter()
        .filter(|destination| {
            let matches_search = needle.is_empty()
                || contains_ci(&destination.name, &needle)
                || contains_ci(&destination.location, &needle)
                || destination
                    .highlights
                    .iter()
                    .any(|highlight| contains_ci(highlight, &needle));

            let matches_difficulty = query
                .difficulty
                .map_or(true, |level| destination.difficulty == level);

            let matches_region = query
                .region
                .as_deref()
                .map_or(true, |region| destination.location == region);

            matches_search && matches_difficulty && matches_region
        })
        .collect();

    if let Some(key) = query.sort {
        sort_destinations(&mut results, key);
    }

    debug!(results = results.len(), "destination query");
    results
}

/// Stable sort of a destination sequence by the given key.
pub fn sort_destinations(destinations: &mut [&Destination], key: DestinationSort) {
    match key {
        DestinationSort::Rating => {
            destinations.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        DestinationSort::Name => {
            destinations.sort_by(|a, b| cmp_name_ci(&a.name, &b.name));
        }
        DestinationSort::WaterTemp => {
            destinations.sort_by(|a, b| b.water_temp.total_cmp(&a.water_temp));
        }
        DestinationSort::Visibility => {
            destinations.sort_by(|a, b| b.visibility.cmp(&a.visibility));
        }
    }
}

/// Flatten every dive shop across the catalog, annotated with the name
/// and slug of its owning destination.
pub fn shop_listings(catalog: &Catalog) -> Vec<ShopListing<'_>> {
    catalog
        .destinations()
        .iter()
        .flat_map(|destination| {
            destination.dive_shops.iter().map(|shop| ShopListing {
                shop,
                destination_name: &destination.name,
                destination_slug: &destination.slug,
            })
        })
        .collect()
}

/// Execute a query over the flattened dive-shop collection.
pub fn run_shop_query<'a>(catalog: &'a Catalog, query: &ShopQuery) -> Vec<ShopListing<'a>> {
    let needle = query.search.to_lowercase();

    let mut results: Vec<ShopListing> = shop_listings(catalog)
        .into_iter()
        .filter(|listing| {
            let shop = listing.shop;
            let matches_search = needle.is_empty()
                || contains_ci(&shop.name, &needle)
                || contains_ci(&shop.location, &needle)
                || shop.services.iter().any(|s| contains_ci(s, &needle));

            let matches_location = query
                .location
                .as_deref()
                .map_or(true, |location| shop.location == location);

            let matches_certification = query
                .certification
                .as_deref()
                .map_or(true, |cert| shop.certifications.iter().any(|c| c == cert));

            matches_search && matches_location && matches_certification
        })
        .collect();

    if let Some(key) = query.sort {
        sort_shops(&mut results, key);
    }

    debug!(results = results.len(), "dive shop query");
    results
}

/// Stable sort of shop listings by the given key.
pub fn sort_shops(listings: &mut [ShopListing<'_>], key: ShopSort) {
    match key {
        ShopSort::Rating => {
            listings.sort_by(|a, b| b.shop.rating.total_cmp(&a.shop.rating));
        }
        ShopSort::Name => {
            listings.sort_by(|a, b| cmp_name_ci(&a.shop.name, &b.shop.name));
        }
        ShopSort::Location => {
            listings.sort_by(|a, b| cmp_name_ci(&a.shop.location, &b.shop.location));
        }
    }
}

/// Flatten every boat excursion across the catalog, annotated with the
/// name and slug of its owning destination.
pub fn excursion_listings(catalog: &Catalog) -> Vec<ExcursionListing<'_>> {
    catalog
        .destinations()
        .iter()
        .flat_map(|destination| {
            destination
                .boat_excursions
                .iter()
                .map(|excursion| ExcursionListing {
                    excursion,
                    destination_name: &destination.name,
                    destination_slug: &destination.slug,
                })
        })
        .collect()
}

/// Execute a query over the flattened excursion collection.
pub fn run_excursion_query<'a>(
    catalog: &'a Catalog,
    query: &ExcursionQuery,
) -> Vec<ExcursionListing<'a>> {
    let needle = query.search.to_lowercase();

    let mut results: Vec<ExcursionListing> = excursion_listings(catalog)
        .into_iter()
        .filter(|listing| {
            let excursion = listing.excursion;
            let matches_search = needle.is_empty()
                || contains_ci(&excursion.name, &needle)
                || contains_ci(&excursion.operator, &needle)
                || excursion.highlights.iter().any(|h| contains_ci(h, &needle));

            let matches_difficulty = query
                .difficulty
                .map_or(true, |level| excursion.difficulty == level);

            let matches_duration = query
                .duration
                .as_deref()
                .map_or(true, |duration| excursion.duration == duration);

            let matches_price = query
                .price
                .map_or(true, |bracket| bracket.contains(excursion.price));

            matches_search && matches_difficulty && matches_duration && matches_price
        })
        .collect();

    if let Some(key) = query.sort {
        sort_excursions(&mut results, key);
    }

    debug!(results = results.len(), "excursion query");
    results
}

/// Stable sort of excursion listings by the given key.
pub fn sort_excursions(listings: &mut [ExcursionListing<'_>], key: ExcursionSort) {
    match key {
        ExcursionSort::Price => {
            listings.sort_by(|a, b| a.excursion.price.total_cmp(&b.excursion.price));
        }
        ExcursionSort::Name => {
            listings.sort_by(|a, b| cmp_name_ci(&a.excursion.name, &b.excursion.name));
        }
        ExcursionSort::Duration => {
            listings.sort_by(|a, b| cmp_name_ci(&a.excursion.duration, &b.excursion.duration));
        }
        ExcursionSort::MaxDivers => {
            listings.sort_by(|a, b| b.excursion.max_divers.cmp(&a.excursion.max_divers));
        }
    }
}

/// Distinct shop locations across the catalog in first-discovered
/// order, for location filter options.
pub fn shop_locations(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    shop_listings(catalog)
        .into_iter()
        .map(|listing| listing.shop.location.as_str())
        .filter(|location| seen.insert(*location))
        .collect()
}

/// Distinct certification tags across all shops in first-discovered
/// order.
pub fn shop_certifications(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut certifications = Vec::new();
    for listing in shop_listings(catalog) {
        for certification in &listing.shop.certifications {
            if seen.insert(certification.as_str()) {
                certifications.push(certification.as_str());
            }
        }
    }
    certifications
}

/// Distinct excursion duration labels in first-discovered order.
pub fn excursion_durations(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    excursion_listings(catalog)
        .into_iter()
        .map(|listing| listing.excursion.duration.as_str())
        .filter(|duration| seen.insert(*duration))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoatExcursion, Contact, Difficulty, DiveShop, PriceBracket};

    fn shop(name: &str, location: &str, rating: f64, certifications: &[&str]) -> DiveShop {
        DiveShop {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            location: location.to_string(),
            rating,
            services: vec!["Guided Dives".to_string()],
            contact: Contact {
                phone: "+1 555 0100".to_string(),
                email: "dive@example.com".to_string(),
                website: None,
            },
            certifications: certifications.iter().map(|c| c.to_string()).collect(),
            languages: vec!["English".to_string()],
            price_range: "$50-100".to_string(),
            image: "shop.jpeg".to_string(),
        }
    }

    fn excursion(
        name: &str,
        price: f64,
        max_divers: u32,
        difficulty: Difficulty,
    ) -> BoatExcursion {
        BoatExcursion {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            operator: "Local Operator".to_string(),
            duration: "Full Day".to_string(),
            max_divers,
            price,
            currency: "USD".to_string(),
            includes: vec!["Lunch".to_string()],
            highlights: vec!["Drift Diving".to_string()],
            schedule: vec!["8:00 AM Departure".to_string()],
            difficulty,
            image: "trip.jpeg".to_string(),
            booking_url: None,
        }
    }

    fn destination(
        slug: &str,
        name: &str,
        location: &str,
        rating: f64,
        difficulty: Difficulty,
        highlights: &[&str],
    ) -> Destination {
        Destination {
            id: slug.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            country: location.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            image: "main.jpeg".to_string(),
            images: vec!["main.jpeg".to_string()],
            rating,
            water_temp: 26.0,
            visibility: 30,
            best_seasons: vec!["January".to_string()],
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            difficulty,
            max_depth: 30,
            dive_shops: Vec::new(),
            boat_excursions: Vec::new(),
        }
    }

    fn fixture() -> Catalog {
        let mut atoll = destination(
            "north-atoll",
            "North Atoll",
            "Indian Ocean",
            4.5,
            Difficulty::Beginner,
            &["Manta Rays", "Coral Gardens"],
        );
        atoll.dive_shops = vec![
            shop("Atoll Divers", "North Atoll", 4.8, &["PADI 5-Star"]),
            shop("Lagoon Dive Base", "South Atoll", 4.2, &["SSI Diamond"]),
        ];
        atoll.boat_excursions = vec![excursion("Manta Safari", 150.0, 12, Difficulty::Beginner)];

        let mut trench = destination(
            "blue-trench",
            "Blue Trench",
            "Coral Sea",
            4.5,
            Difficulty::Advanced,
            &["Walls", "Sharks"],
        );
        trench.dive_shops = vec![shop("Trench Tech", "Trench Bay", 4.9, &["PADI 5-Star"])];
        trench.boat_excursions = vec![
            excursion("Wall Marathon", 100.0, 8, Difficulty::Advanced),
            excursion("Budget Bay Hop", 60.0, 20, Difficulty::Beginner),
        ];

        let wreck = destination(
            "old-wreck",
            "Old Wreck",
            "Coral Sea",
            3.9,
            Difficulty::Advanced,
            &["Wrecks"],
        );

        Catalog::new(vec![atoll, trench, wreck]).expect("valid fixture")
    }

    #[test]
    fn empty_query_returns_everything_in_input_order() {
        let catalog = fixture();
        let results = run_destination_query(&catalog, &DestinationQuery::default());

        let slugs: Vec<&str> = results.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, ["north-atoll", "blue-trench", "old-wreck"]);
    }

    #[test]
    fn search_matches_name_location_and_highlights_case_insensitively() {
        let catalog = fixture();

        let by_name = run_destination_query(
            &catalog,
            &DestinationQuery {
                search: "TRENCH".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].slug, "blue-trench");

        let by_location = run_destination_query(
            &catalog,
            &DestinationQuery {
                search: "coral sea".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_location.len(), 2);

        let by_highlight = run_destination_query(
            &catalog,
            &DestinationQuery {
                search: "manta".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_highlight.len(), 1);
        assert_eq!(by_highlight[0].slug, "north-atoll");
    }

    #[test]
    fn filters_combine_with_logical_and() {
        let catalog = fixture();
        let results = run_destination_query(
            &catalog,
            &DestinationQuery {
                search: "w".to_string(),
                difficulty: Some(Difficulty::Advanced),
                region: Some("Coral Sea".to_string()),
                ..Default::default()
            },
        );

        // "w" matches both Coral Sea destinations via highlights, but
        // only those also matching difficulty and region survive.
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|d| d.location == "Coral Sea"));
        assert!(results
            .iter()
            .all(|d| d.difficulty == Difficulty::Advanced));
    }

    #[test]
    fn unknown_filter_values_yield_empty_results_not_errors() {
        let catalog = fixture();
        let results = run_destination_query(
            &catalog,
            &DestinationQuery {
                region: Some("Atlantis".to_string()),
                ..Default::default()
            },
        );
        assert!(results.is_empty());
    }

    #[test]
    fn rating_sort_is_descending_and_stable() {
        let catalog = fixture();
        let results = run_destination_query(
            &catalog,
            &DestinationQuery {
                sort: Some(DestinationSort::Rating),
                ..Default::default()
            },
        );

        let slugs: Vec<&str> = results.iter().map(|d| d.slug.as_str()).collect();
        // north-atoll and blue-trench share 4.5 and keep input order.
        assert_eq!(slugs, ["north-atoll", "blue-trench", "old-wreck"]);
    }

    #[test]
    fn name_sort_is_ascending_and_case_insensitive() {
        let catalog = fixture();
        let results = run_destination_query(
            &catalog,
            &DestinationQuery {
                sort: Some(DestinationSort::Name),
                ..Default::default()
            },
        );

        let names: Vec<&str> = results.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Blue Trench", "North Atoll", "Old Wreck"]);
    }

    #[test]
    fn shop_listings_carry_owner_annotations() {
        let catalog = fixture();
        let listings = shop_listings(&catalog);

        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].shop.name, "Atoll Divers");
        assert_eq!(listings[0].destination_name, "North Atoll");
        assert_eq!(listings[0].destination_slug, "north-atoll");
        assert_eq!(listings[2].destination_slug, "blue-trench");
    }

    #[test]
    fn shop_query_filters_by_certification_membership() {
        let catalog = fixture();
        let results = run_shop_query(
            &catalog,
            &ShopQuery {
                certification: Some("PADI 5-Star".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|l| l.shop.certifications.iter().any(|c| c == "PADI 5-Star")));
    }

    #[test]
    fn shop_query_searches_service_tags() {
        let catalog = fixture();
        let results = run_shop_query(
            &catalog,
            &ShopQuery {
                search: "guided".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn shop_sort_by_rating_is_descending() {
        let catalog = fixture();
        let results = run_shop_query(
            &catalog,
            &ShopQuery {
                sort: Some(ShopSort::Rating),
                ..Default::default()
            },
        );

        let ratings: Vec<f64> = results.iter().map(|l| l.shop.rating).collect();
        assert_eq!(ratings, [4.9, 4.8, 4.2]);
    }

    #[test]
    fn excursion_price_brackets_use_fixed_thresholds() {
        let catalog = fixture();

        let mid = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                price: Some(PriceBracket::Mid),
                ..Default::default()
            },
        );
        let names: Vec<&str> = mid.iter().map(|l| l.excursion.name.as_str()).collect();
        // 150 and exactly 100 are mid; 60 is budget.
        assert_eq!(names, ["Manta Safari", "Wall Marathon"]);

        let budget = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                price: Some(PriceBracket::Budget),
                ..Default::default()
            },
        );
        assert_eq!(budget.len(), 1);
        assert_eq!(budget[0].excursion.name, "Budget Bay Hop");
    }

    #[test]
    fn excursion_sort_by_price_ascending_and_divers_descending() {
        let catalog = fixture();

        let by_price = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                sort: Some(ExcursionSort::Price),
                ..Default::default()
            },
        );
        let prices: Vec<f64> = by_price.iter().map(|l| l.excursion.price).collect();
        assert_eq!(prices, [60.0, 100.0, 150.0]);

        let by_divers = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                sort: Some(ExcursionSort::MaxDivers),
                ..Default::default()
            },
        );
        let divers: Vec<u32> = by_divers.iter().map(|l| l.excursion.max_divers).collect();
        assert_eq!(divers, [20, 12, 8]);
    }

    #[test]
    fn excursion_duration_filter_is_exact() {
        let catalog = fixture();

        let full_day = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                duration: Some("Full Day".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(full_day.len(), 3);

        let half_day = run_excursion_query(
            &catalog,
            &ExcursionQuery {
                duration: Some("Half Day".to_string()),
                ..Default::default()
            },
        );
        assert!(half_day.is_empty());
    }

    #[test]
    fn distinct_value_helpers_preserve_discovery_order() {
        let catalog = fixture();

        assert_eq!(
            shop_locations(&catalog),
            ["North Atoll", "South Atoll", "Trench Bay"]
        );
        assert_eq!(
            shop_certifications(&catalog),
            ["PADI 5-Star", "SSI Diamond"]
        );
        assert_eq!(excursion_durations(&catalog), ["Full Day"]);
    }
}
