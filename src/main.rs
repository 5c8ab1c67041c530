use bo7_knowledge::config::{CliArgs, ServiceConfig};
use bo7_knowledge::server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from(CliArgs::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting BO7 Knowledge API");
    tracing::info!("Corpus file: {}", config.data_path.display());

    server::serve(config).await
}
