use anyhow::Context;
use chinese_name_generator::logging::{self, log_info};
use chinese_name_generator::{server, AppConfig, AppState, ChineseNameGenerator, OllamaClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AppConfig::from_env().context("loading configuration")?;

    server::prepare_directories(&config.server)
        .await
        .context("creating templates/static directories")?;

    let client = OllamaClient::new(config.ollama.clone())?;
    let generator = Arc::new(ChineseNameGenerator::new(client));

    log_info!(
        base_url = %config.ollama.base_url,
        model = %config.ollama.default_model,
        "Using Ollama endpoint"
    );

    server::serve(AppState::new(generator, config.server)).await
}
