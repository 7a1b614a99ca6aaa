// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::charset::CharPool;
use crate::models::{GeneratedCredential, RandomOptions};

/// Generate a random password from the operating system CSPRNG.
pub fn generate_random(options: &RandomOptions) -> GeneratedCredential {
    generate_random_with(&mut OsRng, options)
}

/// Sample `length` characters uniformly from the pool, overwrite the first
/// positions with one character per selected category, then shuffle the
/// whole sequence.
///
/// When `length` is smaller than the number of guaranteed categories only the
/// first `length` categories (Uppercase, Lowercase, Digits, Special order)
/// are placed. An empty pool yields an empty credential with pool size 0.
pub fn generate_random_with<R>(rng: &mut R, options: &RandomOptions) -> GeneratedCredential
where
    R: Rng + CryptoRng,
{
    let pool = CharPool::build(options);
    if pool.is_empty() || options.length == 0 {
        return GeneratedCredential::empty();
    }

    let chars = pool.chars();
    let mut password: Vec<char> = (0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    let guaranteed = pool.guaranteed_categories();
    for (slot, (_, subset)) in password.iter_mut().zip(guaranteed.iter()) {
        *slot = subset[rng.gen_range(0..subset.len())];
    }

    password.shuffle(rng);

    GeneratedCredential {
        value: password.into_iter().collect(),
        pool_size: pool.len(),
        unit_count: options.length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{DIGITS, LOWERCASE, SIMILAR, SPECIAL, UPPERCASE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn all_categories(length: usize) -> RandomOptions {
        RandomOptions {
            length,
            ..Default::default()
        }
    }

    fn contains_any(value: &str, set: &str) -> bool {
        value.chars().any(|c| set.contains(c))
    }

    fn class_of(c: char) -> usize {
        [UPPERCASE, LOWERCASE, DIGITS, SPECIAL]
            .iter()
            .position(|set| set.contains(c))
            .unwrap()
    }

    #[test]
    fn test_length_and_pool_size() {
        let credential = generate_random(&all_categories(16));
        assert_eq!(credential.value.chars().count(), 16);
        assert_eq!(credential.pool_size, 88);
        assert_eq!(credential.unit_count, 16);
        assert_eq!(credential.strength().text, "Very Strong");
    }

    #[test]
    fn test_every_selected_category_is_covered() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in 4..40 {
            for _ in 0..25 {
                let credential = generate_random_with(&mut rng, &all_categories(length));
                let value = &credential.value;
                assert!(contains_any(value, UPPERCASE), "{value}");
                assert!(contains_any(value, LOWERCASE), "{value}");
                assert!(contains_any(value, DIGITS), "{value}");
                assert!(contains_any(value, SPECIAL), "{value}");
            }
        }
    }

    #[test]
    fn test_exclude_similar() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let options = RandomOptions {
            exclude_similar: true,
            ..all_categories(128)
        };
        for _ in 0..50 {
            let credential = generate_random_with(&mut rng, &options);
            assert!(!contains_any(&credential.value, SIMILAR));
            assert_eq!(credential.pool_size, 82);
        }
    }

    #[test]
    fn test_exclude_similar_still_covers_every_category() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        for length in 4..40 {
            let options = RandomOptions {
                exclude_similar: true,
                ..all_categories(length)
            };
            for _ in 0..25 {
                let credential = generate_random_with(&mut rng, &options);
                let value = &credential.value;
                assert_eq!(value.chars().count(), length);
                assert!(!contains_any(value, SIMILAR), "{value}");
                assert!(contains_any(value, "ABCDEFGHIJKMNPQRSTUVWXYZ"), "{value}");
                assert!(contains_any(value, "abcdefghjkmnpqrstuvwxyz"), "{value}");
                assert!(contains_any(value, "023456789"), "{value}");
                assert!(contains_any(value, SPECIAL), "{value}");
            }
        }
    }

    #[test]
    fn test_guaranteed_characters_are_shuffled() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let draws = 2000;
        let length = 16;
        let mut first_uppercase = 0;
        let mut classes_seen = vec![[false; 4]; length];

        for _ in 0..draws {
            let credential = generate_random_with(&mut rng, &all_categories(length));
            let chars: Vec<char> = credential.value.chars().collect();
            if UPPERCASE.contains(chars[0]) {
                first_uppercase += 1;
            }
            for (position, c) in chars.iter().enumerate() {
                classes_seen[position][class_of(*c)] = true;
            }
        }

        // Roughly 26/88 of leading characters are uppercase once shuffled
        assert!(first_uppercase > 0);
        assert!(first_uppercase < draws * 6 / 10, "{first_uppercase} of {draws}");
        for (position, seen) in classes_seen.iter().enumerate() {
            assert!(seen.iter().all(|s| *s), "position {position} saw only {seen:?}");
        }
    }

    #[test]
    fn test_no_categories_is_unsatisfiable() {
        let options = RandomOptions {
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: false,
            use_special: false,
            ..Default::default()
        };
        let credential = generate_random(&options);
        assert!(credential.is_empty());
        assert_eq!(credential, GeneratedCredential::empty());
        assert_eq!(credential.strength().text, "N/A");
    }

    #[test]
    fn test_single_category() {
        let options = RandomOptions {
            length: 12,
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: true,
            use_special: false,
            exclude_similar: true,
        };
        let credential = generate_random(&options);
        assert_eq!(credential.pool_size, 9);
        assert!(credential.value.chars().all(|c| c.is_ascii_digit() && c != '1'));
    }

    #[test]
    fn test_length_shorter_than_categories() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..50 {
            let credential = generate_random_with(&mut rng, &all_categories(2));
            assert_eq!(credential.value.chars().count(), 2);
            // Uppercase and lowercase are placed first
            assert!(contains_any(&credential.value, UPPERCASE));
            assert!(contains_any(&credential.value, LOWERCASE));
        }
    }

    #[test]
    fn test_outputs_differ() {
        let a = generate_random(&all_categories(32));
        let b = generate_random(&all_categories(32));
        assert_ne!(a.value, b.value);
    }
}
