// src/api/mod.rs
use actix_web::{error, web, App, HttpResponse, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use self::types::ErrorResponse;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate,
        crate::api::handlers::generator::strength,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse,
            crate::models::GenerationResult,
            crate::strength::StrengthRating,
            crate::strength::StrengthTier
        )
    ),
    tags(
        (name = "Generator", description = "Password and passphrase generation endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "Aegis Pass API",
        version = "0.1.0",
        description = "Random password and memorable passphrase generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Malformed JSON bodies get the same `{ "error": ... }` shape as every
/// other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Invalid request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        error::InternalError::from_response(err, response).into()
    })
}

/// Any origin may call the API. `GET` serves `/health` and the docs.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["Content-Type", "Accept"])
        .max_age(3600)
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting Aegis Pass API server on http://{}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(config_data.clone())
            .app_data(json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
            .default_service(web::route().to(handlers::system::not_found))
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
