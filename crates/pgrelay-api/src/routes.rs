//! API routes configuration
//!
//! Every command path funnels into the dispatch handler; anything else is
//! answered with HTTP 400.

use actix_web::{web, HttpResponse};

use crate::handlers;
use crate::models::Command;

/// Configure one route per command plus the unknown-path rejection.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for command in Command::ALL {
        cfg.route(command.path(), web::route().to(handlers::dispatch));
    }
    cfg.default_service(web::route().to(invalid_path));
}

async fn invalid_path() -> HttpResponse {
    HttpResponse::BadRequest().body("invalid request URL")
}
