//! # Dual Hash Index
//!
//! Two `HashSegmentTree`s of the same length over the same string:
//!
//! ```text
//!   forward[i]  = code(s[i]) * B^i         mod M
//!   backward[i] = code(s[i]) * B^(n-1-i)   mod M
//! ```
//!
//! A range sum of `forward` is the substring's hash read left to right (offset by
//! `B^l`); the same range of `backward` is its hash read right to left (offset by
//! `B^(n-1-r)`). Once both offsets are cancelled the two agree exactly when the
//! substring is a palindrome, up to hash collisions.
//!
//! `set` is the only mutation and always rewrites both trees at the same position,
//! so the pair never describes two different strings.

use log::debug;

use crate::cs::hashing::modular::mul_mod;
use crate::cs::hashing::params::HashParams;
use crate::cs::tree::HashSegmentTree;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DualHashIndex {
    forward: HashSegmentTree,
    backward: HashSegmentTree,
    powers: Vec<u64>,
    modulus: u64,
}

impl DualHashIndex {
    /// Builds both trees from `codes` in `O(n log n)`.
    ///
    /// `powers` must hold at least `n` entries of `B^i mod M`.
    ///
    /// # Errors
    /// `Error::Config` when `n == 0`, `codes.len() != n` or the power table is short.
    pub fn build(n: usize, codes: &[u32], powers: Vec<u64>, params: &HashParams) -> Result<Self> {
        if codes.len() != n {
            return Err(Error::Config(format!(
                "declared length {n} but string has {} characters",
                codes.len()
            )));
        }
        if powers.len() < n {
            return Err(Error::Config(format!(
                "power table has {} entries, need {n}",
                powers.len()
            )));
        }

        let mut index = Self {
            forward: HashSegmentTree::with_params(n, params)?,
            backward: HashSegmentTree::with_params(n, params)?,
            powers,
            modulus: params.modulus(),
        };
        for (i, &code) in codes.iter().enumerate() {
            index.set(i, code)?;
        }
        debug!(
            "built dual hash index: n={n}, base={}, modulus={}",
            params.base(),
            params.modulus()
        );
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always `false`; an index covers at least one position.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Writes `code` at 0-based `index` into both trees.
    pub fn set(&mut self, index: usize, code: u32) -> Result<()> {
        let n = self.len();
        if index >= n {
            return Err(Error::OutOfBounds { index, len: n });
        }
        let code = code as u64;
        let fwd = mul_mod(code, self.powers[index], self.modulus);
        let bck = mul_mod(code, self.powers[n - 1 - index], self.modulus);
        self.forward.update(index, fwd)?;
        self.backward.update(index, bck)
    }

    /// `sum code(s[i]) * B^i` over `l..=r`; 0 for an inverted range.
    pub fn forward_hash(&self, l: usize, r: usize) -> Result<u64> {
        self.forward.query(l, r)
    }

    /// `sum code(s[i]) * B^(n-1-i)` over `l..=r`; 0 for an inverted range.
    pub fn backward_hash(&self, l: usize, r: usize) -> Result<u64> {
        self.backward.query(l, r)
    }
}
