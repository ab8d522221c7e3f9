//! Polynomial hashing support.
//!
//! - `modular`: modular arithmetic helpers, power tables and Fermat inverses
//! - `params`: validated base/modulus configuration shared by the hash trees

pub mod modular;
pub mod params;

pub use modular::{add_mod, inverse_power_table, modular_inverse, mul_mod, pow_mod, power_table};
pub use params::{HashParams, HashParamsBuilder, DEFAULT_BASE, DEFAULT_MODULUS};
