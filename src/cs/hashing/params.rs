//! # Hash Parameters
//!
//! The radix `B` and prime modulus `M` of the polynomial hash used by the palindrome
//! index. Parameters are plain immutable values handed to every table and tree that
//! needs them, so independent sessions may run with different parameters.
//!
//! ```rust
//! use palindex::HashParamsBuilder;
//!
//! let params = HashParamsBuilder::new()
//!     .with_base(131)
//!     .with_modulus(998_244_353)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.base(), 131);
//! ```
//!
//! **Note**: a single polynomial hash admits false positives with probability
//! about `len / M` per comparison. It is not a cryptographic hash.

use num_prime::nt_funcs::is_prime64;

use crate::error::{Error, Result};

/// Default base (radix): one more than the byte alphabet.
pub const DEFAULT_BASE: u64 = 257;
/// Default modulus: the prime `10^9 + 7`.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// Validated `(base, modulus)` pair. `1 < base < modulus`, `modulus` prime and `< 2^63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl HashParams {
    /// Validates and returns the pair.
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        HashParamsBuilder::new()
            .with_base(base)
            .with_modulus(modulus)
            .build()
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// A builder for `HashParams`, starting from the defaults.
#[derive(Debug, Clone)]
pub struct HashParamsBuilder {
    base: u64,
    modulus: u64,
}

impl Default for HashParamsBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl HashParamsBuilder {
    /// Creates a new builder with default base/modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus. Must be a prime below `2^63`.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    /// `Error::Config` when the modulus is not a prime in `[2, 2^63)` or the base is
    /// not in `(1, modulus)`. A base congruent to zero would make the inverse-power
    /// table undefined, and base 1 weights every position equally.
    pub fn build(self) -> Result<HashParams> {
        if self.modulus >= 1 << 63 || !is_prime64(self.modulus) {
            return Err(Error::Config(format!(
                "modulus {} must be a prime below 2^63",
                self.modulus
            )));
        }
        if self.base <= 1 || self.base >= self.modulus {
            return Err(Error::Config(format!(
                "base {} must satisfy 1 < base < {}",
                self.base, self.modulus
            )));
        }
        Ok(HashParams {
            base: self.base,
            modulus: self.modulus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = HashParamsBuilder::new().build().unwrap();
        assert_eq!(params, HashParams::default());
        assert_eq!(params.base(), 257);
        assert_eq!(params.modulus(), 1_000_000_007);
    }

    #[test]
    fn test_custom_params() {
        let params = HashParams::new(131, 998_244_353).unwrap();
        assert_eq!(params.base(), 131);
        assert_eq!(params.modulus(), 998_244_353);
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(matches!(HashParams::new(0, 1_000_000_007), Err(Error::Config(_))));
        // base 1 hashes every string to its character sum
        assert!(matches!(HashParams::new(1, 1_000_000_007), Err(Error::Config(_))));
        assert!(HashParams::new(2, 1_000_000_007).is_ok());
        assert!(matches!(
            HashParams::new(1_000_000_007, 1_000_000_007),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            HashParams::new(2_000_000_014, 1_000_000_007),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_composite_modulus() {
        assert!(matches!(HashParams::new(257, 1_000_000_000), Err(Error::Config(_))));
        assert!(matches!(HashParams::new(257, 1), Err(Error::Config(_))));
        assert!(matches!(HashParams::new(257, 0), Err(Error::Config(_))));
    }
}
