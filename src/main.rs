use anyhow::Context;
use clap::Parser;
use line_search::config::cli::ServerArgs;
use line_search::config::types::ServerConfig;
use line_search::server::listener::Listener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::resolve(ServerArgs::parse()).context("Invalid configuration")?;

    tracing::info!("Corpus: {}", config.corpus_path.display());
    if !config.corpus_path.is_file() {
        tracing::warn!(
            "Corpus {} is not a readable file yet; queries will answer not found until it is",
            config.corpus_path.display()
        );
    }

    let listener = Listener::bind(&config)
        .await
        .with_context(|| format!("Failed to start server on {}", config.bind_addr()))?;

    tracing::info!("Press Ctrl+C to shutdown");

    listener
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
