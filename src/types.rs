//! Core types for movie-harvest

use serde::{Deserialize, Serialize};

/// Separator used when flattening name lists (genres, directors, actors) into one cell
pub const NAME_SEPARATOR: &str = ", ";

/// Catalog identifier of a movie
///
/// The ID space is sparse: many IDs do not exist or are not public.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl MovieId {
    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl PartialEq<i64> for MovieId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One flattened row of the output file
///
/// Field order here is the column order of the CSV header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Catalog ID as reported by the document
    pub id: Option<MovieId>,
    /// Localized title
    pub title: Option<String>,
    /// Release date as given by the catalog (e.g. "2000-01-01")
    pub release_date: Option<String>,
    /// Genre names joined with ", "
    pub genres: String,
    /// Average user rating
    pub vote_average: Option<f64>,
    /// Catalog popularity score
    pub popularity: Option<f64>,
    /// Up to 3 director names joined with ", "
    pub director: String,
    /// Up to 5 top-billed cast names joined with ", "
    pub actors: String,
    /// IMDb identifier
    pub imdb_id: Option<String>,
    /// Facebook handle
    pub facebook_id: Option<String>,
    /// Instagram handle
    pub instagram_id: Option<String>,
    /// Twitter handle
    pub twitter_id: Option<String>,
}

impl MovieRecord {
    /// Column names in output order
    pub const FIELDS: [&'static str; 12] = [
        "id",
        "title",
        "release_date",
        "genres",
        "vote_average",
        "popularity",
        "director",
        "actors",
        "imdb_id",
        "facebook_id",
        "instagram_id",
        "twitter_id",
    ];

    /// Whether the record carries a non-empty release date
    ///
    /// Only such records are kept by the collector.
    pub fn has_release_date(&self) -> bool {
        self.release_date
            .as_deref()
            .is_some_and(|date| !date.is_empty())
    }

    /// Genre names in order
    pub fn genre_names(&self) -> Vec<&str> {
        split_names(&self.genres)
    }

    /// Director names in order
    pub fn director_names(&self) -> Vec<&str> {
        split_names(&self.director)
    }

    /// Actor names in billing order
    pub fn actor_names(&self) -> Vec<&str> {
        split_names(&self.actors)
    }
}

/// Join names with [`NAME_SEPARATOR`]
pub fn join_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect::<Vec<_>>().join(NAME_SEPARATOR)
}

/// Split a joined cell back into names; an empty cell yields no names
pub fn split_names(joined: &str) -> Vec<&str> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(NAME_SEPARATOR).collect()
}

/// Counters describing one collector run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectStats {
    /// IDs processed
    pub attempted: u64,
    /// Records kept
    pub collected: u64,
    /// IDs skipped because the request failed
    pub fetch_failed: u64,
    /// IDs skipped because the document could not be flattened
    pub parse_failed: u64,
    /// Records dropped for lacking a release date
    pub missing_release_date: u64,
}
