//! # Modular Arithmetic
//!
//! Small helpers over `Z/mZ` for a 64-bit modulus `m < 2^63`. Products are taken
//! in 128 bits and reduced, so no intermediate overflows.
//!
//! The two table builders are what the palindrome index needs:
//!
//! ```text
//!   power_table(b, n)[i]         = b^i       mod m
//!   inverse_power_table(b, n)[i] = (b^-1)^i  mod m
//! ```
//!
//! The inverse is computed with Fermat's little theorem (`v^(m-2)`), which is only
//! correct for a prime modulus. `HashParams` checks primality before any table is built.

use crate::error::{Error, Result};

#[inline]
pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Exponentiation by squaring: `base^exp mod m`.
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut result = 1;
    let mut b = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, b, m);
        }
        b = mul_mod(b, b, m);
        exp >>= 1;
    }
    result
}

/// Inverse of `value` modulo the prime `modulus`, as `value^(modulus-2)`.
///
/// # Errors
/// - `Error::Domain` if `value ≡ 0 (mod modulus)`; zero has no inverse.
/// - `Error::Config` if `modulus < 2`.
pub fn modular_inverse(value: u64, modulus: u64) -> Result<u64> {
    if modulus < 2 {
        return Err(Error::Config(format!("modulus must be >= 2, got {modulus}")));
    }
    if value % modulus == 0 {
        return Err(Error::Domain { value, modulus });
    }
    Ok(pow_mod(value, modulus - 2, modulus))
}

/// `[1, base, base^2, ..., base^(length-1)]`, each reduced mod `modulus`.
pub fn power_table(base: u64, length: usize, modulus: u64) -> Vec<u64> {
    let mut table = Vec::with_capacity(length);
    let mut current = 1 % modulus;
    for _ in 0..length {
        table.push(current);
        current = mul_mod(current, base, modulus);
    }
    table
}

/// Powers of `base^-1`. Fails like `modular_inverse` when `base ≡ 0`.
pub fn inverse_power_table(base: u64, length: usize, modulus: u64) -> Result<Vec<u64>> {
    let inv = modular_inverse(base, modulus)?;
    Ok(power_table(inv, length, modulus))
}
