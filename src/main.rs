use anyhow::{Context, Result};
use seat_swap::{config, report, StoreConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run(dotenv: Option<PathBuf>) -> Result<String> {
    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }
    let store_config = StoreConfig::from_env().context("reading store configuration")?;
    info!(store = %store_config, "using seat store");

    let seats = seat_swap::swap_seats(&store_config)
        .await
        .context("swapping seats")?;
    Ok(report::render(&seats))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before the subscriber, so RUST_LOG may come from .env.
    let dotenv = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = match dotenv {
        Ok(path) => run(path).await,
        Err(err) => Err(err.into()),
    };
    match outcome {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
