use clap::Parser;
use profile_api::server::{self, AppState};
use profile_api::utils::{logger, validation::Validate};
use profile_api::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose);

    tracing::info!("Starting profile-api");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = AppState::from_config(&config)?;

    tracing::info!("🚀 Starting server on port {}", config.port);
    server::run(state, config.port).await?;

    Ok(())
}
