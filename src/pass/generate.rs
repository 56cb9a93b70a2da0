//! Password generation.

use std::fmt;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::{self, Categories};
use crate::error::GenerateError;

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password(s.to_string())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a single password using the thread-local RNG.
pub fn generate(length: usize, categories: &Categories) -> Result<Password, GenerateError> {
    generate_with(&mut rand::thread_rng(), length, categories)
}

/// Generate a single password, drawing from `rng`.
///
/// Every character is drawn independently and uniformly, with replacement,
/// from the union of the enabled categories.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    categories: &Categories,
) -> Result<Password, GenerateError> {
    if categories.is_empty() {
        return Err(GenerateError::EmptyCategoryPool);
    }
    if length == 0 {
        return Err(GenerateError::ZeroLength);
    }
    let mut chars = charset::build(categories);

    debug!(length, pool_size = chars.len(), "generating password");

    let password: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    chars.zeroize();
    Ok(Password(password))
}

/// Generate `count` passwords with the same request.
pub fn generate_batch(
    count: usize,
    length: usize,
    categories: &Categories,
) -> Result<Vec<Password>, GenerateError> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| generate_with(&mut rng, length, categories))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn selections() -> Vec<Categories> {
        // every non-empty combination of the four flags
        (1u8..16)
            .map(|bits| Categories {
                uppercase: bits & 1 != 0,
                lowercase: bits & 2 != 0,
                digits: bits & 4 != 0,
                special: bits & 8 != 0,
            })
            .collect()
    }

    #[test]
    fn length_and_membership_hold_for_every_selection() {
        let mut rng = StdRng::seed_from_u64(7);
        for categories in selections() {
            let pool = charset::build(&categories);
            for length in 1..=64 {
                let password = generate_with(&mut rng, length, &categories).unwrap();
                assert_eq!(password.len(), length);
                assert!(password.as_str().chars().all(|c| pool.contains(&c)));
            }
        }
    }

    #[test]
    fn empty_pool_is_rejected_for_any_length() {
        for length in [0, 1, 8, 12, 20, 1000] {
            assert_eq!(
                generate(length, &Categories::NONE),
                Err(GenerateError::EmptyCategoryPool)
            );
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_with(&mut rng, 0, &Categories::default()),
            Err(GenerateError::ZeroLength)
        );
        assert_eq!(
            generate_batch(2, 0, &Categories::default()).unwrap_err(),
            GenerateError::ZeroLength
        );
    }

    #[test]
    fn single_category_draws_only_from_it() {
        let digits_only = Categories {
            digits: true,
            ..Categories::NONE
        };
        let password = generate(20, &digits_only).unwrap();
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn every_character_of_a_small_pool_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let digits_only = Categories {
            digits: true,
            ..Categories::NONE
        };
        let password = generate_with(&mut rng, 2000, &digits_only).unwrap();
        for c in Category::Digit.chars().chars() {
            assert!(password.as_str().contains(c), "digit {c} never drawn");
        }
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate_with(&mut StdRng::seed_from_u64(1), 16, &Categories::default()).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(1), 16, &Categories::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_produces_requested_count() {
        let batch = generate_batch(5, 12, &Categories::default()).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 12));
        assert_eq!(
            generate_batch(3, 12, &Categories::NONE).unwrap_err(),
            GenerateError::EmptyCategoryPool
        );
    }

    #[test]
    fn debug_does_not_leak_contents() {
        let password = Password::from("hunter22");
        assert_eq!(format!("{password:?}"), "Password(<8 chars>)");
        assert_eq!(password.to_string(), "hunter22");
    }
}
