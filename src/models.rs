// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::error::{GeneratorError, Result};
use crate::strength::{estimate_strength, StrengthRating};

// Random password options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RandomOptions {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_special: bool,
    pub exclude_similar: bool,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: 16,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_special: true,
            exclude_similar: false,
        }
    }
}

impl RandomOptions {
    pub fn validate(&self, min: usize, max: usize) -> Result<()> {
        if self.length < min || self.length > max {
            return Err(GeneratorError::InvalidLength { min, max, got: self.length });
        }
        Ok(())
    }
}

// Memorable passphrase options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemorableOptions {
    pub word_count: usize,
    pub separator: String,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
        }
    }
}

impl MemorableOptions {
    pub fn validate(&self, max: usize) -> Result<()> {
        if self.word_count < 1 || self.word_count > max {
            return Err(GeneratorError::InvalidWordCount { min: 1, max, got: self.word_count });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationRequest {
    Random(RandomOptions),
    Memorable(MemorableOptions),
}

impl GenerationRequest {
    pub fn mode(&self) -> &'static str {
        match self {
            GenerationRequest::Random(_) => "random",
            GenerationRequest::Memorable(_) => "memorable",
        }
    }
}

/// A generated secret together with the alphabet size and number of draws
/// it came from. Both are needed for strength scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCredential {
    pub value: String,
    pub pool_size: usize,
    pub unit_count: usize,
}

impl GeneratedCredential {
    pub fn empty() -> Self {
        Self {
            value: String::new(),
            pool_size: 0,
            unit_count: 0,
        }
    }

    /// An empty value means the constraints could not be satisfied.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn strength(&self) -> StrengthRating {
        estimate_strength(&self.value, self.pool_size, self.unit_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub password: String,
    pub pool_size: usize,
    pub strength: StrengthRating,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.password.is_empty()
    }
}

impl From<GeneratedCredential> for GenerationResult {
    fn from(credential: GeneratedCredential) -> Self {
        let strength = credential.strength();
        Self {
            password: credential.value,
            pool_size: credential.pool_size,
            strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_tagged_by_mode() {
        let json = r#"{"mode":"memorable","word_count":3,"separator":"."}"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            GenerationRequest::Memorable(MemorableOptions {
                word_count: 3,
                separator: ".".to_string(),
            })
        );
        assert_eq!(request.mode(), "memorable");
    }

    #[test]
    fn test_random_validation_bounds() {
        let mut options = RandomOptions::default();
        assert!(options.validate(8, 128).is_ok());

        options.length = 4;
        assert!(matches!(
            options.validate(8, 128),
            Err(GeneratorError::InvalidLength { got: 4, .. })
        ));
    }

    #[test]
    fn test_memorable_rejects_zero_words() {
        let options = MemorableOptions { word_count: 0, ..Default::default() };
        assert!(options.validate(20).is_err());
    }

    #[test]
    fn test_empty_credential_has_no_strength() {
        let credential = GeneratedCredential::empty();
        assert!(credential.is_empty());
        assert_eq!(credential.strength().text, "N/A");

        let result = GenerationResult::from(credential);
        assert!(result.is_empty());
        assert_eq!(result.pool_size, 0);
    }

    #[test]
    fn test_non_empty_credential() {
        let credential = GeneratedCredential {
            value: "Xy7!".to_string(),
            pool_size: 88,
            unit_count: 4,
        };
        assert!(!credential.is_empty());
        assert!(!GenerationResult::from(credential).is_empty());
    }
}
