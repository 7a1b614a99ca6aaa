// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::collections::HashMap;

use crate::core::config::Config;
use crate::error::{GeneratorError, Result};
use crate::models::{GenerationRequest, GenerationResult, MemorableOptions, RandomOptions};
use crate::strength::StrengthRating;

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// "random" or "memorable" (default: random)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Password length (default: 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub use_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub use_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub use_numbers: Option<bool>,
    /// Include special symbols (default: true)
    pub use_special: Option<bool>,
    /// Exclude i, l, 1, L, o, O (default: false)
    pub exclude_similar: Option<bool>,
    /// Number of words in a memorable passphrase (default: 4)
    pub word_count: Option<usize>,
    /// Separator between words (default: "-")
    pub separator: Option<String>,
    /// How many credentials to generate (default: 1, capped by the server)
    pub count: Option<usize>,
}

impl GenerateRequest {
    /// Fill missing fields from the configured defaults and apply the
    /// request-layer bounds.
    pub fn to_generation_request(&self, config: &Config) -> Result<GenerationRequest> {
        match self.kind.as_deref().unwrap_or("random") {
            "random" => {
                let defaults = config.default_random_options();
                let options = RandomOptions {
                    length: self.length.unwrap_or(defaults.length),
                    use_uppercase: self.use_uppercase.unwrap_or(defaults.use_uppercase),
                    use_lowercase: self.use_lowercase.unwrap_or(defaults.use_lowercase),
                    use_numbers: self.use_numbers.unwrap_or(defaults.use_numbers),
                    use_special: self.use_special.unwrap_or(defaults.use_special),
                    exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
                };
                options.validate(config.min_password_length, config.max_password_length)?;
                Ok(GenerationRequest::Random(options))
            }
            "memorable" => {
                let defaults = config.default_memorable_options();
                let options = MemorableOptions {
                    word_count: self.word_count.unwrap_or(defaults.word_count),
                    separator: self.separator.clone().unwrap_or(defaults.separator),
                };
                options.validate(config.max_word_count)?;
                Ok(GenerationRequest::Memorable(options))
            }
            other => Err(GeneratorError::UnknownMode(other.to_string())),
        }
    }

    pub fn batch_count(&self, max: usize) -> usize {
        self.count.unwrap_or(1).clamp(1, max.max(1))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated credentials in generation order
    pub passwords: Vec<String>,
    /// Strength rating keyed by credential
    pub strength: HashMap<String, StrengthRating>,
    /// One entry per credential, duplicates included
    pub results: Vec<GenerationResult>,
}

impl From<Vec<GenerationResult>> for GenerateResponse {
    fn from(results: Vec<GenerationResult>) -> Self {
        let passwords = results.iter().map(|r| r.password.clone()).collect();
        let strength = results
            .iter()
            .map(|r| (r.password.clone(), r.strength.clone()))
            .collect();

        Self { passwords, strength, results }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Credential to rate
    pub password: String,
    /// Alphabet size it was drawn from (characters or words)
    pub pool_size: usize,
    /// Number of independent draws (characters or words)
    pub unit_count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_body() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        let request = req.to_generation_request(&Config::default()).unwrap();
        assert_eq!(request, GenerationRequest::Random(RandomOptions::default()));
        assert_eq!(req.batch_count(10), 1);
    }

    #[test]
    fn test_count_is_clamped() {
        let req = GenerateRequest { count: Some(50), ..Default::default() };
        assert_eq!(req.batch_count(10), 10);
        let req = GenerateRequest { count: Some(0), ..Default::default() };
        assert_eq!(req.batch_count(10), 1);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let req = GenerateRequest { kind: Some("pin".to_string()), ..Default::default() };
        assert!(matches!(
            req.to_generation_request(&Config::default()),
            Err(GeneratorError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_response_keeps_duplicates_in_results() {
        let rating = crate::strength::estimate_strength("same", 26, 4);
        let result = GenerationResult {
            password: "same".to_string(),
            pool_size: 26,
            strength: rating,
        };
        let response = GenerateResponse::from(vec![result.clone(), result]);
        assert_eq!(response.passwords.len(), 2);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.strength.len(), 1);
    }
}
