// src/generators/mod.rs
pub mod charset;
pub mod passphrase;
pub mod password;
pub mod wordlist;

use log::debug;

use crate::models::{GeneratedCredential, GenerationRequest, GenerationResult};

pub use passphrase::generate_memorable;
pub use password::generate_random;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, request: &GenerationRequest) -> GeneratedCredential {
        match request {
            GenerationRequest::Random(options) => generate_random(options),
            GenerationRequest::Memorable(options) => generate_memorable(options),
        }
    }

    /// Run `count` independent generations. Empty credentials are kept so
    /// the caller decides how to treat an unsatisfiable batch.
    pub fn generate_batch(&self, request: &GenerationRequest, count: usize) -> Vec<GenerationResult> {
        let results: Vec<GenerationResult> = (0..count)
            .map(|_| {
                let credential = self.generate(request);
                if credential.is_empty() {
                    debug!("No characters left to sample for {} request", request.mode());
                }
                GenerationResult::from(credential)
            })
            .collect();

        debug!(
            "Generated {} {} credential(s), pool size {}",
            results.len(),
            request.mode(),
            results.first().map(|r| r.pool_size).unwrap_or(0)
        );

        results
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
