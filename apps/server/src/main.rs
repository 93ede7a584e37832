use anyhow::Context;
use ihub::domain::config::ApiConfig;
use ihub::kernel::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use ihub_logger::Logger;
use ihub_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = ConfigLoader::new()
        .optional_file(DEFAULT_CONFIG_FILE)
        .load()
        .context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level_str(&cfg.logging.level)?
        .json(cfg.logging.json);
    if let Some(filter) = &cfg.logging.filter {
        logger = logger.env_filter(filter);
    }
    if let Some(directory) = &cfg.logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build()?.run().await
}
