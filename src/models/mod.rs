//! Shared data models for the destination catalog and its queries.
//!
//! Entity types use `camelCase` serde renames so catalog data stays
//! wire-compatible with the JSON shape the site's frontend consumes.
//! Everything here is immutable after load; queries never mutate the
//! collection.

use serde::{Deserialize, Serialize};

/// Default cap on autocomplete suggestions, matching the search box in
/// the presentation layer.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// Difficulty level for a destination or excursion.
///
/// Exactly four levels exist; the serialized form uses the same
/// capitalized labels the dataset and UI use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Contact details for a dive shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    /// Not every shop maintains a website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A dive shop operating at a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiveShop {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Shop rating in [0, 5]; validated on catalog construction.
    pub rating: f64,
    /// Service tags such as "PADI Courses" or "Equipment Rental".
    pub services: Vec<String>,
    pub contact: Contact,
    /// Certification tags such as "PADI 5-Star IDC".
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    /// Display label like "$80-150"; never parsed by the engine.
    pub price_range: String,
    pub image: String,
}

/// A bookable boat excursion offered at a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatExcursion {
    pub id: String,
    pub name: String,
    pub operator: String,
    /// Duration label such as "Full Day"; compared and sorted lexically.
    pub duration: String,
    pub max_divers: u32,
    /// Raw numeric price. Price-bracket filtering compares this value
    /// directly; `currency` is not normalized (see [`PriceBracket`]).
    pub price: f64,
    /// ISO-style currency code, e.g. "USD" or "AUD".
    pub currency: String,
    /// What the booking includes ("2 Dives", "Lunch", ...).
    pub includes: Vec<String>,
    pub highlights: Vec<String>,
    /// Ordered schedule entries for the day.
    pub schedule: Vec<String>,
    pub difficulty: Difficulty,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

/// A diving destination and everything it owns.
///
/// Destinations exclusively own their shops and excursions; the same
/// shop or excursion never appears under two destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Region label used for display and exact-match region filtering.
    pub location: String,
    pub country: String,
    /// URL-safe identifier, unique across the catalog.
    pub slug: String,
    pub description: String,
    /// Primary image reference.
    pub image: String,
    /// Ordered gallery image references.
    pub images: Vec<String>,
    /// Rating in [0, 5]; validated on catalog construction.
    pub rating: f64,
    /// Water temperature in degrees Celsius.
    pub water_temp: f64,
    /// Visibility distance in meters.
    pub visibility: u32,
    /// Month labels for the best diving conditions.
    pub best_seasons: Vec<String>,
    /// Highlight tags such as "Whale Sharks" or "Coral Gardens"; these
    /// participate in free-text search and autocomplete.
    pub highlights: Vec<String>,
    pub difficulty: Difficulty,
    /// Maximum dive depth in meters.
    pub max_depth: u32,
    pub dive_shops: Vec<DiveShop>,
    pub boat_excursions: Vec<BoatExcursion>,
}

/// Sort key for destination queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationSort {
    /// Rating, descending.
    Rating,
    /// Name, ascending, case-insensitive.
    Name,
    /// Water temperature, descending.
    WaterTemp,
    /// Visibility distance, descending.
    Visibility,
}

/// Sort key for flattened dive-shop queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopSort {
    Rating,
    Name,
    Location,
}

/// Sort key for flattened excursion queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcursionSort {
    /// Price, ascending.
    Price,
    Name,
    /// Duration label, lexical.
    Duration,
    /// Maximum group size, descending.
    MaxDivers,
}

/// Fixed price buckets for excursion filtering.
///
/// Brackets compare the raw `price` field against 100 and 200
/// regardless of currency; USD and AUD entries land in the same
/// buckets. This mirrors the source data's semantics and is a known
/// quirk, not something the engine corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBracket {
    /// price < 100
    Budget,
    /// 100 <= price < 200
    Mid,
    /// price >= 200
    Premium,
}

impl PriceBracket {
    /// Whether a raw price falls inside this bracket.
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBracket::Budget => price < 100.0,
            PriceBracket::Mid => (100.0..200.0).contains(&price),
            PriceBracket::Premium => price >= 200.0,
        }
    }
}

/// Parameters for a destination query.
///
/// All predicates are optional and combine with logical AND. An empty
/// `search` string means "no text constraint"; `None` filters mean "no
/// constraint". Without a `sort` key the input order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationQuery {
    /// Free-text search, matched case-insensitively as a substring
    /// against name, location, and every highlight tag (logical OR).
    #[serde(default)]
    pub search: String,
    /// Exact difficulty filter.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Exact region filter, compared against `Destination::location`.
    #[serde(default)]
    pub region: Option<String>,
    /// Optional stable sort applied after filtering.
    #[serde(default)]
    pub sort: Option<DestinationSort>,
}

/// Parameters for a query over the flattened dive-shop collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopQuery {
    /// Free-text search over shop name, location, and service tags.
    #[serde(default)]
    pub search: String,
    /// Exact shop-location filter.
    #[serde(default)]
    pub location: Option<String>,
    /// Certification the shop must hold (exact membership test).
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub sort: Option<ShopSort>,
}

/// Parameters for a query over the flattened excursion collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcursionQuery {
    /// Free-text search over excursion name, operator, and highlights.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Exact duration-label filter.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<PriceBracket>,
    #[serde(default)]
    pub sort: Option<ExcursionSort>,
}

/// A dive shop annotated with its owning destination.
///
/// The projection borrows from the catalog: the slug is a non-owning
/// back-reference to the parent destination, not a copy of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListing<'a> {
    #[serde(flatten)]
    pub shop: &'a DiveShop,
    pub destination_name: &'a str,
    pub destination_slug: &'a str,
}

/// A boat excursion annotated with its owning destination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcursionListing<'a> {
    #[serde(flatten)]
    pub excursion: &'a BoatExcursion,
    pub destination_name: &'a str,
    pub destination_slug: &'a str,
}
