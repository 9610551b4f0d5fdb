//! Movie record data structure.

use serde::{Deserialize, Serialize};

/// A record field that selector rules can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Rating,
    Genre,
    Synopsis,
    Year,
    Duration,
    Cover,
    Banner,
    Play,
    Link,
}

impl Field {
    /// Name used in logs and extraction errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Rating => "rating",
            Field::Genre => "genre",
            Field::Synopsis => "synopsis",
            Field::Year => "year",
            Field::Duration => "duration",
            Field::Cover => "cover",
            Field::Banner => "banner",
            Field::Play => "play",
            Field::Link => "link",
        }
    }
}

/// A movie scraped from the upstream site.
///
/// Every key is serialized, absent values as `null`, so all endpoints
/// share one output shape. Keys keep the upstream's Portuguese names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    /// Trailing path segment of the movie link
    pub id: String,

    #[serde(rename = "titulo")]
    pub title: Option<String>,

    #[serde(rename = "avaliacao")]
    pub rating: Option<String>,

    #[serde(rename = "genero")]
    pub genre: Option<String>,

    #[serde(rename = "sinopse")]
    pub synopsis: Option<String>,

    #[serde(rename = "ano")]
    pub year: Option<String>,

    #[serde(rename = "duracao")]
    pub duration: Option<String>,

    #[serde(rename = "capa")]
    pub cover_image_url: Option<String>,

    #[serde(rename = "banner")]
    pub banner_image_url: Option<String>,

    pub play_url: Option<String>,

    /// Link to the movie page on the upstream site
    pub url: Option<String>,
}

impl MovieRecord {
    /// Create an empty record with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Store a value for a field.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Rating => &mut self.rating,
            Field::Genre => &mut self.genre,
            Field::Synopsis => &mut self.synopsis,
            Field::Year => &mut self.year,
            Field::Duration => &mut self.duration,
            Field::Cover => &mut self.cover_image_url,
            Field::Banner => &mut self.banner_image_url,
            Field::Play => &mut self.play_url,
            Field::Link => &mut self.url,
        };
        *slot = value;
    }

    /// Read the value stored for a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Rating => self.rating.as_deref(),
            Field::Genre => self.genre.as_deref(),
            Field::Synopsis => self.synopsis.as_deref(),
            Field::Year => self.year.as_deref(),
            Field::Duration => self.duration.as_deref(),
            Field::Cover => self.cover_image_url.as_deref(),
            Field::Banner => self.banner_image_url.as_deref(),
            Field::Play => self.play_url.as_deref(),
            Field::Link => self.url.as_deref(),
        }
    }
}
