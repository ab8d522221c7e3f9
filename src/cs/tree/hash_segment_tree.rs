//! # Hash Segment Tree
//!
//! A fixed-capacity segment tree of residues mod `M` under addition, supporting point
//! assignment and inclusive range sums in `O(log n)`.
//!
//! ## Layout
//!
//! The classic iterative bottom-up tree: one flat buffer of `2n` slots, leaf `i` at
//! `n + i`, node `k` the sum of `2k` and `2k + 1`, slot 0 unused. This works for any
//! `n`, not only powers of two.
//!
//! ```text
//!   update: leaf -> root, halving the index and recombining children
//!   query:  walk [l, r+1) inward from the leaves, taking l when it is a right
//!           child and r-1 when r is a right boundary, then halve both
//! ```
//!
//! Every internal node equals the sum of its children after each `update` returns.

use crate::cs::hashing::modular::add_mod;
use crate::cs::hashing::params::HashParams;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct HashSegmentTree {
    n: usize,
    modulus: u64,
    tree: Box<[u64]>,
}

impl HashSegmentTree {
    /// A tree of `capacity` zero leaves using the default modulus.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_params(capacity, &HashParams::default())
    }

    /// A tree of `capacity` zero leaves reducing mod `params.modulus()`.
    ///
    /// # Errors
    /// `Error::Config` if `capacity == 0`.
    pub fn with_params(capacity: usize, params: &HashParams) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::Config("segment tree capacity must be positive".into()));
        }
        Ok(Self {
            n: capacity,
            modulus: params.modulus(),
            tree: vec![0; 2 * capacity].into_boxed_slice(),
        })
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; a tree has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The stored (reduced) value of leaf `index`.
    pub fn get(&self, index: usize) -> Result<u64> {
        self.check(index)?;
        Ok(self.tree[self.n + index])
    }

    /// Assigns `value mod M` (non-negative representative) to leaf `index` and
    /// recomputes its ancestors.
    pub fn update(&mut self, index: usize, value: impl Into<i128>) -> Result<()> {
        self.check(index)?;
        let m = self.modulus;
        let value: i128 = value.into();
        let mut i = index + self.n;
        self.tree[i] = value.rem_euclid(m as i128) as u64;
        while i > 1 {
            i /= 2;
            self.tree[i] = add_mod(self.tree[2 * i], self.tree[2 * i + 1], m);
        }
        Ok(())
    }

    /// Sum mod `M` of leaves `l..=r`.
    ///
    /// An inverted range (`l > r`) is empty and sums to 0; it is not an error.
    ///
    /// # Errors
    /// `Error::OutOfBounds` if `l <= r` and `r >= len()`.
    pub fn query(&self, l: usize, r: usize) -> Result<u64> {
        if l > r {
            return Ok(0);
        }
        self.check(r)?;

        let m = self.modulus;
        let mut result = 0;
        let mut lo = l + self.n;
        let mut hi = r + self.n + 1;
        while lo < hi {
            if lo & 1 == 1 {
                result = add_mod(result, self.tree[lo], m);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                result = add_mod(result, self.tree[hi], m);
            }
            lo /= 2;
            hi /= 2;
        }
        Ok(result)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.n {
            return Err(Error::OutOfBounds {
                index,
                len: self.n,
            });
        }
        Ok(())
    }
}
