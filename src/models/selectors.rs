// src/models/selectors.rs

//! CSS selector rules for scraping movie listings and detail pages.

use serde::{Deserialize, Serialize};

use super::movie::Field;

/// Where a rule reads its value from once the selector matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Whitespace-normalized text content
    #[default]
    Text,

    /// Value of the named attribute
    Attr(String),

    /// URL literal inside the element's inline `style` attribute
    BannerStyle,
}

/// A single field extraction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: Field,

    /// CSS selector, relative to the listing fragment
    pub selector: String,

    #[serde(default)]
    pub source: FieldSource,

    /// Whether a listing fails when this field is missing
    #[serde(default)]
    pub required: bool,
}

impl FieldRule {
    fn text(field: Field, selector: &str) -> Self {
        Self {
            field,
            selector: selector.to_string(),
            source: FieldSource::Text,
            required: true,
        }
    }

    fn attr(field: Field, selector: &str, attr: &str) -> Self {
        Self {
            field,
            selector: selector.to_string(),
            source: FieldSource::Attr(attr.to_string()),
            required: true,
        }
    }

    fn banner(selector: &str) -> Self {
        Self {
            field: Field::Banner,
            selector: selector.to_string(),
            source: FieldSource::BannerStyle,
            required: true,
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Selector for each listing item plus the rules applied inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingProfile {
    pub item_selector: String,
    pub rules: Vec<FieldRule>,
}

impl ListingProfile {
    /// Full movie cards on `/filmes`, filtered by genre or not.
    pub fn movie_listing() -> Self {
        Self {
            item_selector: ".info-filme".to_string(),
            rules: movie_rules(),
        }
    }

    /// Poster-only cards on `/categoria/{slug}`.
    pub fn category_card() -> Self {
        Self {
            item_selector: ".movie-item".to_string(),
            rules: card_rules(),
        }
    }

    /// Suggestion cards on `/pesquisa`.
    pub fn search_card() -> Self {
        Self {
            item_selector: ".suggested-item".to_string(),
            rules: card_rules(),
        }
    }
}

fn movie_rules() -> Vec<FieldRule> {
    let mut rules = detail_rules();
    // Link to the movie page itself, never the `.play` anchor
    rules.push(FieldRule::attr(Field::Link, "a[href*='/filme/']", "href"));
    rules
}

/// Movie page rules. The page URL itself becomes the record's link.
fn detail_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::text(Field::Title, ".titulo h1"),
        FieldRule::text(Field::Rating, ".imdb p"),
        FieldRule::text(Field::Genre, ".genres ul li strong"),
        FieldRule::text(Field::Synopsis, ".sinopse p"),
        FieldRule::text(Field::Year, ".informacoes li strong"),
        FieldRule::text(Field::Duration, ".duration li strong"),
        FieldRule::attr(Field::Cover, ".capa img", "src"),
        FieldRule::banner(".poster-m"),
        FieldRule::attr(Field::Play, ".play a", "href").optional(),
    ]
}

fn card_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::attr(Field::Link, "a", "href"),
        FieldRule::attr(Field::Cover, "img", "src"),
    ]
}

/// All selector profiles used by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "ListingProfile::movie_listing")]
    pub movie_listing: ListingProfile,

    #[serde(default = "ListingProfile::category_card")]
    pub category_card: ListingProfile,

    #[serde(default = "ListingProfile::search_card")]
    pub search_card: ListingProfile,

    /// Rules for the single-movie page; every field is optional there
    #[serde(default = "detail_rules")]
    pub detail: Vec<FieldRule>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            movie_listing: ListingProfile::movie_listing(),
            category_card: ListingProfile::category_card(),
            search_card: ListingProfile::search_card(),
            detail: detail_rules(),
        }
    }
}
