//! Catalog entity records.
//!
//! Books reference their author and genres by id. Every record is immutable once
//! the catalog has been loaded. Display-oriented fields (`title`, `image`,
//! `description`) default to empty strings when a catalog file omits them; the
//! preview renderer substitutes fallback text at render time.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Id of the [`Author`] who wrote the book.
    pub author: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Ids of the [`Genre`]s the book belongs to. Never empty in a loaded catalog.
    pub genres: Vec<String>,
    #[serde(deserialize_with = "deserialize_published")]
    pub published: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Calendar year of publication, as shown in the detail subtitle.
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// A book genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Parses a publication date.
///
/// Accepts RFC 3339 timestamps (`1996-01-01T00:00:00.000Z`) and plain dates
/// (`1996-01-01`). Timestamps keep their UTC calendar date.
///
/// # Errors
///
/// Returns the chrono parse error of the plain-date attempt when neither form matches.
pub fn parse_published(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"),
        |timestamp| Ok(timestamp.naive_utc().date()),
    )
}

fn deserialize_published<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published(&raw).map_err(serde::de::Error::custom)
}
