//! Typed view of a `/movie/{id}` document with embedded `credits` and `external_ids`.
//!
//! Every member is optional. A JSON `null` and an absent key decode the same way,
//! so missing-field tolerance lives here rather than in the flattening code.

use serde::Deserialize;

/// Movie details with the two appended sub-resources
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetails {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genres: Option<Vec<Genre>>,
    pub vote_average: Option<f64>,
    pub popularity: Option<f64>,
    pub credits: Option<Credits>,
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Genre {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    pub cast: Option<Vec<CastMember>>,
    pub crew: Option<Vec<CrewMember>>,
}

/// Cast entry; the catalog returns these in billing order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastMember {
    pub name: Option<String>,
    pub character: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewMember {
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
}

impl MovieDetails {
    /// Cast list, empty when credits or cast are absent
    pub fn cast(&self) -> &[CastMember] {
        self.credits
            .as_ref()
            .and_then(|c| c.cast.as_deref())
            .unwrap_or_default()
    }

    /// Crew list, empty when credits or crew are absent
    pub fn crew(&self) -> &[CrewMember] {
        self.credits
            .as_ref()
            .and_then(|c| c.crew.as_deref())
            .unwrap_or_default()
    }

    pub fn genres(&self) -> &[Genre] {
        self.genres.as_deref().unwrap_or_default()
    }
}
