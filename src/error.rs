//! Error types for movie-harvest
//!
//! Errors fall into two groups:
//! - Per-movie errors (network, HTTP status, body decoding, record parsing). The
//!   collector logs these and moves on to the next ID.
//! - Run-level errors (configuration, file output). These are returned from
//!   [`run`](crate::run) and end the run.

use crate::types::MovieId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for movie-harvest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for movie-harvest
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Transport-level failure (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("movie {movie_id}: catalog returned HTTP {status}")]
    HttpStatus {
        /// The requested movie ID
        movie_id: MovieId,
        /// The HTTP status code
        status: u16,
    },

    /// The response body was not valid JSON
    #[error("movie {movie_id}: invalid JSON body: {source}")]
    Decode {
        /// The requested movie ID
        movie_id: MovieId,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A nested structure of the movie document was missing or malformed
    #[error("movie {}: failed to parse key '{key}'", display_id(.movie_id))]
    Parse {
        /// The document's ID, if it could be read
        movie_id: Option<MovieId>,
        /// JSON path of the offending key (e.g. "credits.cast[2].name")
        key: String,
    },

    /// I/O error while writing the output file
    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn display_id(id: &Option<MovieId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

impl Error {
    /// Short machine-readable name of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config",
            Error::Network(_) | Error::HttpStatus { .. } | Error::Decode { .. } => "transport",
            Error::Parse { .. } => "parse",
            Error::Io { .. } | Error::Csv(_) => "filesystem",
        }
    }
}
