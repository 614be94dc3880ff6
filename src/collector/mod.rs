//! Sequential range scan over catalog IDs.
//!
//! For every ID in an inclusive range the collector fetches the raw document,
//! flattens it, and keeps the record when it has a release date. Per-ID failures
//! are logged and skipped; they never end the scan. After every ID, whatever the
//! outcome, the collector waits for the configured delay so the catalog's rate
//! limit is respected.

use crate::catalog::CatalogClient;
use crate::config::{Config, range_len};
use crate::error::Result;
use crate::extract::extract;
use crate::types::{CollectStats, MovieId, MovieRecord};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Outcome of processing a single ID
#[derive(Debug)]
enum Step {
    /// Record kept
    Collected(MovieRecord),
    /// Request failed
    FetchFailed,
    /// Document could not be flattened
    ParseFailed,
    /// Record had no release date
    NoReleaseDate,
}

/// Drives the fetch → extract → accumulate loop
pub struct Collector {
    /// Catalog client used for every request
    client: CatalogClient,

    /// Fixed pause after each ID
    request_delay: Duration,
}

impl Collector {
    /// Create a collector from the run configuration
    ///
    /// # Errors
    /// Returns error if the catalog client cannot be built from `config`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: CatalogClient::new(config)?,
            request_delay: config.request_delay,
        })
    }

    /// Scan `start_id..=end_id` and return the kept records in ascending ID order
    pub async fn collect(&self, start_id: MovieId, end_id: MovieId) -> Vec<MovieRecord> {
        self.collect_with_stats(start_id, end_id).await.0
    }

    /// Same as [`collect`](Self::collect), also returning per-outcome counters
    pub async fn collect_with_stats(
        &self,
        start_id: MovieId,
        end_id: MovieId,
    ) -> (Vec<MovieRecord>, CollectStats) {
        let total = range_len(start_id, end_id);
        let mut records = Vec::new();
        let mut stats = CollectStats::default();

        info!(
            start_id = %start_id,
            end_id = %end_id,
            total,
            delay_ms = self.request_delay.as_millis() as u64,
            "Starting catalog scan"
        );

        for (position, id) in (start_id.get()..=end_id.get()).enumerate() {
            let movie_id = MovieId(id);
            info!(
                movie_id = %movie_id,
                position = position + 1,
                total,
                "Processing movie"
            );

            stats.attempted += 1;
            match self.process(movie_id).await {
                Step::Collected(record) => {
                    stats.collected += 1;
                    records.push(record);
                }
                Step::FetchFailed => stats.fetch_failed += 1,
                Step::ParseFailed => stats.parse_failed += 1,
                Step::NoReleaseDate => stats.missing_release_date += 1,
            }

            sleep(self.request_delay).await;
        }

        info!(
            attempted = stats.attempted,
            collected = stats.collected,
            fetch_failed = stats.fetch_failed,
            parse_failed = stats.parse_failed,
            missing_release_date = stats.missing_release_date,
            "Catalog scan finished"
        );

        (records, stats)
    }

    async fn process(&self, movie_id: MovieId) -> Step {
        let raw = match self.client.fetch_movie(movie_id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(movie_id = %movie_id, kind = e.kind(), error = %e, "Request failed, skipping");
                return Step::FetchFailed;
            }
        };

        let record = match extract(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(movie_id = %movie_id, kind = e.kind(), error = %e, "Failed to parse movie, skipping");
                return Step::ParseFailed;
            }
        };

        if !record.has_release_date() {
            debug!(movie_id = %movie_id, "No release date, dropping record");
            return Step::NoReleaseDate;
        }

        Step::Collected(record)
    }
}

#[cfg(test)]
mod tests;
