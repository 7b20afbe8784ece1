//! Short code generation and validation.

use rand::TryRngCore;
use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::OsRng;

/// Generates fixed-length codes drawn from `[a-zA-Z0-9]`.
///
/// Uses the operating system's random number generator so codes are not
/// predictable from previously issued ones.
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Produces a random alphanumeric code of the configured length.
    ///
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    pub fn generate(&self) -> String {
        let mut rng = OsRng.unwrap_err();
        Alphanumeric.sample_string(&mut rng, self.length)
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Returns `true` when `code` is exactly `length` alphanumeric characters.
///
/// Used by the routing layer to reject path segments that cannot be issued
/// codes without consulting the registry.
pub fn is_valid_code(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_configured_length() {
        for length in [1, 6, 12, 32] {
            let code = CodeGenerator::new(length).generate();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_is_alphanumeric() {
        let generator = CodeGenerator::new(64);

        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_produces_unique_codes() {
        let generator = CodeGenerator::new(6);

        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_is_valid_code_accepts_issued_shape() {
        assert!(is_valid_code("a1B2c3", 6));
        assert!(is_valid_code("ZZZZZZ", 6));
        assert!(is_valid_code("000000", 6));
    }

    #[test]
    fn test_is_valid_code_rejects_wrong_length() {
        assert!(!is_valid_code("abc", 6));
        assert!(!is_valid_code("abcdefg", 6));
        assert!(!is_valid_code("", 6));
    }

    #[test]
    fn test_is_valid_code_rejects_non_alphanumeric() {
        assert!(!is_valid_code("ab-cd3", 6));
        assert!(!is_valid_code("ab cd3", 6));
        assert!(!is_valid_code("ab_cd3", 6));
        assert!(!is_valid_code("abcdé3", 6));
    }
}
