// src/generators/passphrase.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use super::wordlist::WORDLIST;
use crate::models::{GeneratedCredential, MemorableOptions};

/// Generate a Diceware-style passphrase from the operating system CSPRNG.
pub fn generate_memorable(options: &MemorableOptions) -> GeneratedCredential {
    generate_memorable_with(&mut OsRng, options)
}

/// Words are drawn independently and with replacement; repeats are kept.
pub fn generate_memorable_with<R>(rng: &mut R, options: &MemorableOptions) -> GeneratedCredential
where
    R: Rng + CryptoRng,
{
    let words: Vec<&str> = (0..options.word_count)
        .map(|_| WORDLIST[rng.gen_range(0..WORDLIST.len())])
        .collect();

    GeneratedCredential {
        value: words.join(&options.separator),
        pool_size: WORDLIST.len(),
        unit_count: options.word_count,
    }
}
