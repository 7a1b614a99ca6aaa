// src/generators/charset.rs
use crate::models::RandomOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Characters dropped from the pool when `exclude_similar` is set.
pub const SIMILAR: &str = "il1LoO";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharCategory {
    /// Enumeration order. Coverage guarantees are placed in this order.
    pub const ALL: [CharCategory; 4] = [
        CharCategory::Uppercase,
        CharCategory::Lowercase,
        CharCategory::Digits,
        CharCategory::Special,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharCategory::Uppercase => UPPERCASE,
            CharCategory::Lowercase => LOWERCASE,
            CharCategory::Digits => DIGITS,
            CharCategory::Special => SPECIAL,
        }
    }

    pub fn is_selected(&self, options: &RandomOptions) -> bool {
        match self {
            CharCategory::Uppercase => options.use_uppercase,
            CharCategory::Lowercase => options.use_lowercase,
            CharCategory::Digits => options.use_numbers,
            CharCategory::Special => options.use_special,
        }
    }
}

fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}

/// The sampling alphabet for one random generation, plus the per-category
/// subsets that survived exclusion.
#[derive(Debug, Clone)]
pub struct CharPool {
    chars: Vec<char>,
    categories: Vec<(CharCategory, Vec<char>)>,
}

impl CharPool {
    pub fn build(options: &RandomOptions) -> Self {
        let mut chars: Vec<char> = Vec::new();
        let mut categories = Vec::new();

        for category in CharCategory::ALL {
            if !category.is_selected(options) {
                continue;
            }

            for c in category.chars().chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }

            let subset: Vec<char> = category
                .chars()
                .chars()
                .filter(|c| !(options.exclude_similar && is_similar(*c)))
                .collect();

            // A category emptied by exclusion is skipped, not an error
            if !subset.is_empty() {
                categories.push((category, subset));
            }
        }

        if options.exclude_similar {
            chars.retain(|c| !is_similar(*c));
        }

        Self { chars, categories }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Selected categories that still have characters, in enumeration order.
    pub fn guaranteed_categories(&self) -> &[(CharCategory, Vec<char>)] {
        &self.categories
    }
}
