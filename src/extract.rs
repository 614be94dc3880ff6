//! Flattening of raw movie documents into [`MovieRecord`] rows.

use crate::catalog::models::MovieDetails;
use crate::error::{Error, Result};
use crate::types::{MovieId, MovieRecord, join_names};

/// Maximum number of directors kept per movie
pub const MAX_DIRECTORS: usize = 3;

/// Maximum number of top-billed actors kept per movie
pub const MAX_ACTORS: usize = 5;

/// Crew job that marks a director
const DIRECTOR_JOB: &str = "Director";

/// Flatten one raw movie document into a record
///
/// Absent scalars and sub-resources become empty values. A document whose shape
/// does not match (wrong types, list entries without a `name`) fails with
/// [`Error::Parse`] carrying the path of the offending key.
pub fn extract(raw: &serde_json::Value) -> Result<MovieRecord> {
    let movie_id = raw.get("id").and_then(|v| v.as_i64()).map(MovieId);
    let details = decode(raw, movie_id)?;
    flatten(&details, movie_id)
}

fn decode(raw: &serde_json::Value, movie_id: Option<MovieId>) -> Result<MovieDetails> {
    serde_path_to_error::deserialize(raw).map_err(|e| Error::Parse {
        movie_id,
        key: e.path().to_string(),
    })
}

fn flatten(details: &MovieDetails, movie_id: Option<MovieId>) -> Result<MovieRecord> {
    let genres = details
        .genres()
        .iter()
        .enumerate()
        .map(|(i, genre)| {
            required_name(genre.name.as_deref(), movie_id, || format!("genres[{i}].name"))
        })
        .collect::<Result<Vec<_>>>()?;

    let directors = details
        .crew()
        .iter()
        .enumerate()
        .filter(|(_, member)| member.job.as_deref() == Some(DIRECTOR_JOB))
        .map(|(i, member)| {
            required_name(member.name.as_deref(), movie_id, || {
                format!("credits.crew[{i}].name")
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // Every director entry must be named, even those past the cut-off
    let directors = directors.into_iter().take(MAX_DIRECTORS);

    let actors = details
        .cast()
        .iter()
        .take(MAX_ACTORS)
        .enumerate()
        .map(|(i, member)| {
            required_name(member.name.as_deref(), movie_id, || {
                format!("credits.cast[{i}].name")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let external_ids = details.external_ids.clone().unwrap_or_default();

    Ok(MovieRecord {
        id: details.id.map(MovieId),
        title: details.title.clone(),
        release_date: details.release_date.clone(),
        genres: join_names(genres),
        vote_average: details.vote_average,
        popularity: details.popularity,
        director: join_names(directors),
        actors: join_names(actors),
        imdb_id: external_ids.imdb_id,
        facebook_id: external_ids.facebook_id,
        instagram_id: external_ids.instagram_id,
        twitter_id: external_ids.twitter_id,
    })
}

fn required_name<'a>(
    name: Option<&'a str>,
    movie_id: Option<MovieId>,
    key: impl FnOnce() -> String,
) -> Result<&'a str> {
    name.ok_or_else(|| Error::Parse {
        movie_id,
        key: key(),
    })
}
