use clap::Parser;
use power_skills::adapters::{serve, ReqwestFetcher};
use power_skills::skills::build_registry;
use power_skills::utils::{logger, validation::Validate};
use power_skills::{CliConfig, EnvSettings};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting power-skills host");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.load()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let settings = EnvSettings::from_config(&config);
    let fetcher = Arc::new(ReqwestFetcher::new(Duration::from_secs(
        config.server.request_timeout_seconds,
    ))?);

    let registry = build_registry(&config, &settings, fetcher)?;
    serve(&config.server.listen_addr, registry).await?;

    Ok(())
}
