// src/cli/menu.rs
use inquire::{Confirm, Select, Text};

use super::handlers::{handle_generate, memorable_request, print_results, random_request};
use crate::core::config::Config;

const RANDOM: &str = "🔐  Random password";
const MEMORABLE: &str = "🧠  Memorable passphrase";

fn prompt_number(message: &str, default: usize) -> Result<usize, inquire::InquireError> {
    Text::new(message)
        .with_default(&default.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))
}

pub fn run_interactive(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║            🛡  AEGIS PASS             ║");
    println!("╚══════════════════════════════════════╝");

    let mode = Select::new("What would you like to generate?", vec![RANDOM, MEMORABLE]).prompt()?;

    let request = if mode == RANDOM {
        let length = prompt_number("Password length:", config.default_password_length)?;

        let include_uppercase = Confirm::new("Include uppercase letters?")
            .with_default(true)
            .prompt()?;

        let include_lowercase = Confirm::new("Include lowercase letters?")
            .with_default(true)
            .prompt()?;

        let include_numbers = Confirm::new("Include numbers?")
            .with_default(true)
            .prompt()?;

        let include_special = Confirm::new("Include special symbols?")
            .with_default(true)
            .prompt()?;

        let exclude_similar = Confirm::new("Exclude similar characters (i, l, 1, L, o, O)?")
            .with_default(config.default_password_exclude_similar)
            .prompt()?;

        random_request(
            config,
            Some(length),
            !include_uppercase,
            !include_lowercase,
            !include_numbers,
            !include_special,
            exclude_similar,
        )
    } else {
        let words = prompt_number("Number of words:", config.default_word_count)?;
        let separator = Text::new("Separator:")
            .with_default(&config.default_separator)
            .prompt()?;

        memorable_request(config, Some(words), Some(separator))
    };

    let count = prompt_number("How many?", 1)?;

    match handle_generate(config, &request, count) {
        Ok(results) => {
            println!();
            print_results(&results);
        }
        Err(e) => println!("❌ {}", e),
    }

    Ok(())
}
