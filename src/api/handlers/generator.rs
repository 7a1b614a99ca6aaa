// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::api::types::{ErrorResponse, GenerateRequest, GenerateResponse, StrengthRequest};
use crate::core::config::Config;
use crate::error::GeneratorError;
use crate::generators::PasswordGenerator;
use crate::models::GenerationResult;
use crate::strength::{estimate_strength, StrengthRating};

fn bad_request(e: GeneratorError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { error: e.to_string() })
}

/// Generate passwords or passphrases
///
/// Generates `count` independent credentials and rates each one.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated credentials", body = GenerateResponse),
        (status = 400, description = "Invalid or unsatisfiable request", body = ErrorResponse)
    )
)]
pub async fn generate(
    config: web::Data<Config>,
    generation_req: web::Json<GenerateRequest>,
) -> HttpResponse {
    let generation_req = generation_req.into_inner();

    let request = match generation_req.to_generation_request(&config) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            return bad_request(e);
        }
    };
    let count = generation_req.batch_count(config.max_batch_count);

    let results: Vec<GenerationResult> = PasswordGenerator::new()
        .generate_batch(&request, count)
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect();

    if results.is_empty() {
        warn!("No {} credential could be generated with the given constraints", request.mode());
        return bad_request(GeneratorError::EmptyPool);
    }

    info!(
        "Generated {} {} credential(s) rated {}",
        results.len(),
        request.mode(),
        results[0].strength.text
    );

    HttpResponse::Ok().json(GenerateResponse::from(results))
}

/// Rate a credential
///
/// Rates a credential from the pool size and draw count it was generated with.
#[utoipa::path(
    post,
    path = "/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength rating", body = StrengthRating)
    )
)]
pub async fn strength(strength_req: web::Json<StrengthRequest>) -> HttpResponse {
    let rating = estimate_strength(
        &strength_req.password,
        strength_req.pool_size,
        strength_req.unit_count,
    );
    HttpResponse::Ok().json(rating)
}
