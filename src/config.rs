//! Configuration types for movie-harvest

use crate::error::{Error, Result};
use crate::types::MovieId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Placeholder credential used when no real key has been supplied
pub const PLACEHOLDER_API_KEY: &str = "YOUR_TMDB_API_KEY";

/// Run configuration
///
/// Built once at start-up and passed by reference to the catalog client, the
/// collector and the writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// TMDB v3 API key
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Response language for localized fields (default: "zh-CN")
    #[serde(default = "default_language")]
    pub language: String,

    /// Catalog API root (default: "https://api.themoviedb.org/3")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Output CSV file (default: "movies_data.csv")
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,

    /// First ID of the scan, inclusive (default: 1)
    #[serde(default = "default_start_id")]
    pub start_id: MovieId,

    /// Last ID of the scan, inclusive (default: 100)
    #[serde(default = "default_end_id")]
    pub end_id: MovieId,

    /// Per-request timeout (default: 10 seconds)
    #[serde(default = "default_request_timeout", with = "duration_ms")]
    pub request_timeout: Duration,

    /// Fixed pause after every ID (default: 400 ms)
    ///
    /// Keeps the scan under the catalog's request-rate limit.
    #[serde(default = "default_request_delay", with = "duration_ms")]
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            language: default_language(),
            base_url: default_base_url(),
            save_path: default_save_path(),
            start_id: default_start_id(),
            end_id: default_end_id(),
            request_timeout: default_request_timeout(),
            request_delay: default_request_delay(),
        }
    }
}

impl Config {
    /// Check that the configuration can be used for a run
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the offending key when the API key or
    /// language is empty, or when the base URL cannot be parsed.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config {
                message: "api_key must not be empty".to_string(),
                key: Some("api_key".to_string()),
            });
        }

        if self.language.trim().is_empty() {
            return Err(Error::Config {
                message: "language must not be empty".to_string(),
                key: Some("language".to_string()),
            });
        }

        self.base()?;
        Ok(())
    }

    /// Parsed catalog root, always ending in '/' so relative joins keep the version segment
    pub(crate) fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| Error::Config {
            message: format!("invalid base_url '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })
    }

    /// Number of IDs in the configured range
    pub fn range_len(&self) -> u64 {
        range_len(self.start_id, self.end_id)
    }
}

/// Number of IDs in an inclusive range; zero when `start > end`
pub(crate) fn range_len(start: MovieId, end: MovieId) -> u64 {
    if start > end {
        0
    } else {
        end.0.abs_diff(start.0).saturating_add(1)
    }
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_language() -> String {
    "zh-CN".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_save_path() -> PathBuf {
    PathBuf::from("movies_data.csv")
}

fn default_start_id() -> MovieId {
    MovieId(1)
}

fn default_end_id() -> MovieId {
    MovieId(100)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_request_delay() -> Duration {
    Duration::from_millis(400)
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
