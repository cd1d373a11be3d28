//! Entity types received from the recommendation backend.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

// ============================================================================
// MOVIE
// ============================================================================

/// A movie suggested in response to a user query.
///
/// Immutable once received; the client never edits or persists movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub year: i32,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            description: description.into(),
            year,
        }
    }

    /// Card heading, e.g. `Inception (2010)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// Backend row id of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(pub i64);

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A past query and the movies the backend recommended for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub user_input: String,
    /// `None` when the backend sent no timestamp or one in an unknown layout.
    #[serde(default, with = "backend_timestamp")]
    pub timestamp: Option<Timestamp>,
    pub recommended_movies: Vec<Movie>,
}

impl HistoryEntry {
    /// Titles of the recommended movies, in backend order.
    pub fn movie_titles(&self) -> impl Iterator<Item = &str> {
        self.recommended_movies.iter().map(|m| m.title.as_str())
    }
}

// ============================================================================
// TIMESTAMP PARSING
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized timestamp format: {raw}")]
pub struct TimestampError {
    pub raw: String,
}

/// Naive layouts the backend may emit. SQLite's `CURRENT_TIMESTAMP` uses the
/// space-separated form; Python's `isoformat()` uses the `T` form.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a backend timestamp.
///
/// RFC 3339 strings keep their offset and are converted to UTC. Strings
/// without an offset are taken to already be UTC.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| TimestampError {
            raw: raw.to_string(),
        })
}

/// Lenient timestamp field: a bad value on one row must not reject the list.
mod backend_timestamp {
    use super::{parse_timestamp, Timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(raw) => parse_timestamp(&raw).ok(),
            _ => None,
        })
    }
}
