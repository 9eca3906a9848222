use anyhow::Context;
use catgallery::api::CatApiClient;
use catgallery::cli::Cli;
use catgallery::logging::init_tracing;
use catgallery::ui::runtime;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .context("Failed to load configuration")?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(
        log = %log_path.display(),
        base_url = %config.api.base_url,
        page_size = config.query.initial_page_size,
        "Starting catgallery"
    );

    let client = CatApiClient::new(&config.api, &config.query)
        .context("Failed to create API client")?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("catgallery-fetch")
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(&config, Arc::new(client), tokio_runtime.handle())
        .context("Terminal UI failed")?;

    tokio_runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
