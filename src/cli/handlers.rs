// src/cli/handlers.rs
use console::{style, StyledObject};

use crate::core::config::Config;
use crate::error::{GeneratorError, Result};
use crate::generators::PasswordGenerator;
use crate::models::{GenerationRequest, GenerationResult, MemorableOptions, RandomOptions};
use crate::strength::{StrengthRating, StrengthTier};

// Handlers for CLI commands
pub fn handle_generate(
    config: &Config,
    request: &GenerationRequest,
    count: usize,
) -> Result<Vec<GenerationResult>> {
    if count == 0 || count > config.max_batch_count {
        return Err(GeneratorError::InvalidCount { max: config.max_batch_count, got: count });
    }

    match request {
        GenerationRequest::Random(options) => {
            options.validate(config.min_password_length, config.max_password_length)?
        }
        GenerationRequest::Memorable(options) => options.validate(config.max_word_count)?,
    }

    let results: Vec<GenerationResult> = PasswordGenerator::new()
        .generate_batch(request, count)
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect();

    if results.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    log::info!("Generated {} {} credential(s) from the CLI", results.len(), request.mode());
    Ok(results)
}

#[allow(clippy::too_many_arguments)]
pub fn random_request(
    config: &Config,
    length: Option<usize>,
    no_upper: bool,
    no_lower: bool,
    no_digits: bool,
    no_special: bool,
    exclude_similar: bool,
) -> GenerationRequest {
    let defaults = config.default_random_options();
    GenerationRequest::Random(RandomOptions {
        length: length.unwrap_or(defaults.length),
        use_uppercase: !no_upper,
        use_lowercase: !no_lower,
        use_numbers: !no_digits,
        use_special: !no_special,
        exclude_similar: exclude_similar || defaults.exclude_similar,
    })
}

pub fn memorable_request(
    config: &Config,
    words: Option<usize>,
    separator: Option<String>,
) -> GenerationRequest {
    let defaults = config.default_memorable_options();
    GenerationRequest::Memorable(MemorableOptions {
        word_count: words.unwrap_or(defaults.word_count),
        separator: separator.unwrap_or(defaults.separator),
    })
}

pub fn styled_rating(rating: &StrengthRating) -> StyledObject<String> {
    let label = format!("{} ({:.0} bits)", rating.text, rating.entropy_bits);
    match rating.tier {
        StrengthTier::NotApplicable => style(label).dim(),
        StrengthTier::VeryWeak => style(label).red(),
        StrengthTier::Weak => style(label).color256(208),
        StrengthTier::Medium => style(label).yellow(),
        StrengthTier::Strong => style(label).blue(),
        StrengthTier::VeryStrong => style(label).green().bold(),
    }
}

pub fn print_results(results: &[GenerationResult]) {
    for result in results {
        println!("{}  {}", style(&result.password).bold(), styled_rating(&result.strength));
    }
}
