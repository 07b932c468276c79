//! Server lifecycle management helpers.
//!
//! Bootstraps the database connection and wires the HTTP server: connect to
//! PostgreSQL (fatal on failure), then bind and run actix with the
//! configured worker count.

use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use log::info;
use pgrelay_api::routes;
use pgrelay_api::sql::Database;

use crate::config::ServerConfig;

pub async fn run(config: ServerConfig) -> Result<()> {
    let database = tokio::time::timeout(
        Duration::from_secs(config.database.connect_timeout_secs),
        Database::connect(&config.database.url),
    )
    .await
    .context("timed out connecting to PostgreSQL")?
    .context("failed to connect to PostgreSQL")?;
    info!("connected to PostgreSQL");

    let data = web::Data::new(database);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        // CORS for web browser clients
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(data.clone())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run()
    .await?;

    info!("server shutdown complete");
    Ok(())
}
