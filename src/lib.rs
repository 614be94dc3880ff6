//! # movie-harvest
//!
//! Batch collector for TMDB movie metadata.
//!
//! A run scans an inclusive range of catalog IDs, one request at a time, flattens
//! each movie (with its credits and external IDs) into a [`MovieRecord`], keeps the
//! records that have a release date, and writes them to a single CSV file at the end.
//!
//! ## Quick Start
//!
//! ```no_run
//! use movie_harvest::{Config, MovieId, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         api_key: "your-api-key".to_string(),
//!         start_id: MovieId(1),
//!         end_id: MovieId(20),
//!         ..Default::default()
//!     };
//!
//!     let outcome = run(&config).await?;
//!     println!("{}", outcome);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// TMDB catalog client
pub mod catalog;
/// Range scan driver
pub mod collector;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Raw document flattening
pub mod extract;
/// Core types
pub mod types;
/// CSV output
pub mod writer;

// Re-export commonly used types
pub use catalog::CatalogClient;
pub use collector::Collector;
pub use config::Config;
pub use error::{Error, Result};
pub use extract::extract;
pub use types::{CollectStats, MovieId, MovieRecord};
pub use writer::{WriteOutcome, write_records};

/// Run a complete collection: validate `config`, scan its ID range, write the CSV.
///
/// Per-movie failures are logged and skipped. Only configuration and output
/// errors are returned.
pub async fn run(config: &Config) -> Result<WriteOutcome> {
    config.validate()?;

    let collector = Collector::new(config)?;
    let records = collector.collect(config.start_id, config.end_id).await;

    write_records(&records, &config.save_path)
}
