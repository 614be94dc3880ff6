//! movie-harvest binary: scan the configured ID range and write the CSV file.

use movie_harvest::config::PLACEHOLDER_API_KEY;
use movie_harvest::{Config, run};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins when set; otherwise info and above
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::default();
    if config.api_key == PLACEHOLDER_API_KEY {
        warn!("api_key is still the placeholder, the catalog will reject requests");
    }

    info!(
        start_id = %config.start_id,
        end_id = %config.end_id,
        language = %config.language,
        save_path = %config.save_path.display(),
        "Starting movie-harvest"
    );

    let outcome = run(&config).await?;
    println!("{}", outcome);

    Ok(())
}
