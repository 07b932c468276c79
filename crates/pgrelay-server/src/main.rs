// pgrelay server
//
// Binary entry point: load configuration, initialize logging, connect to
// PostgreSQL, and serve the command API.

mod config;
mod lifecycle;
mod logging;

use anyhow::Result;
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = match config::ServerConfig::from_file("pgrelay.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: pgrelay.toml not found, using defaults");
            config::ServerConfig::default()
        }
    };

    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("starting pgrelay v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    lifecycle::run(config).await
}
