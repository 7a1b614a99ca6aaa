// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.route("/generate", web::post().to(handlers::generator::generate))
        .route("/strength", web::post().to(handlers::generator::strength));

    // System status
    cfg.route("/health", web::get().to(handlers::system::health));
}
