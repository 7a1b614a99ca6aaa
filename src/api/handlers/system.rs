// src/api/handlers/system.rs

use actix_web::{HttpRequest, HttpResponse, Responder};
use log::debug;

use crate::api::types::{ErrorResponse, HealthResponse};

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found(req: HttpRequest) -> impl Responder {
    debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not Found".to_string(),
    })
}
