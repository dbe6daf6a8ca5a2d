use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// CLI Entry Point
///
/// Generates an HTML page with the configured AI provider and writes
/// `index.html`, `404.html` and `metadata.json` to the output directory.
///
/// - config/: Environment configuration (provider, page, output)
/// - setup/: Dependency injection and the run sequence
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG can come from `.env` too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration; a missing API key aborts before anything is written
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Generate and publish
    Runner::run(&config, &container).await?;

    Ok(())
}
