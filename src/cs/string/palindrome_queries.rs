//! # Palindrome Queries
//!
//! A dynamic palindrome-substring oracle. Given a string of fixed length `n`, it
//! interleaves two kinds of operation, each in `O(log n)`:
//!
//! - **Update** `(k, c)`: replace the character at 1-based position `k` with `c`.
//! - **Query** `(a, b)`: is the substring at 1-based positions `a..=b` a palindrome?
//!
//! ## How it works
//!
//! A `DualHashIndex` keeps a forward tree (`code * B^i`) and a backward tree
//! (`code * B^(n-1-i)`). For a 0-based range `[l, r]`:
//!
//! ```text
//!   F = forward.query(l, r)  * B^-l          = sum code(s[i]) * B^(i-l)
//!   R = backward.query(l, r) * B^-(n-1-r)    = sum code(s[i]) * B^(r-i)
//! ```
//!
//! `F` is the substring's hash and `R` the hash of its reverse, so `F == R` answers
//! the query. A true palindrome always yields `YES`; a non-palindrome yields `YES`
//! only on a hash collision (probability about `len / M`).
//!
//! ## Example
//!
//! ```rust
//! use palindex::{Operation, PalindromeOracle, Verdict};
//!
//! let mut oracle = PalindromeOracle::new(5, "ABCBA").unwrap();
//! assert_eq!(oracle.query(1, 5).unwrap(), Verdict::Yes);
//! assert_eq!(oracle.query(1, 3).unwrap(), Verdict::No);
//!
//! oracle.apply(&"1 1 Z".parse::<Operation>().unwrap()).unwrap();
//! assert_eq!(oracle.query(1, 5).unwrap(), Verdict::No);
//! ```
//!
//! Characters are hashed by their Unicode scalar value, one `char` per position.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rayon::prelude::*;

use crate::cs::hashing::modular::{inverse_power_table, mul_mod, power_table};
use crate::cs::hashing::params::HashParams;
use crate::cs::string::dual_hash_index::DualHashIndex;
use crate::error::{Error, Result};

/// Answer to a palindrome query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(is_palindrome: bool) -> Self {
        if is_palindrome {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => f.write_str("YES"),
            Verdict::No => f.write_str("NO"),
        }
    }
}

/// One step of an operation list. Positions are 1-based.
///
/// The textual form is `1 k c` for an update and `2 a b` for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Update { position: usize, ch: char },
    Query { left: usize, right: usize },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Update { position, ch } => write!(f, "1 {position} {ch}"),
            Operation::Query { left, right } => write!(f, "2 {left} {right}"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let tag = parts
            .next()
            .ok_or_else(|| Error::Parse("empty operation".into()))?;

        let position = |token: Option<&str>| -> Result<usize> {
            let token = token.ok_or_else(|| Error::Parse(format!("missing argument in {line:?}")))?;
            token
                .parse()
                .map_err(|_| Error::Parse(format!("bad position {token:?} in {line:?}")))
        };

        let op = match tag {
            "1" => {
                let position = position(parts.next())?;
                let token = parts
                    .next()
                    .ok_or_else(|| Error::Parse(format!("missing character in {line:?}")))?;
                let mut chars = token.chars();
                let ch = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(Error::Parse(format!(
                            "expected a single character, got {token:?}"
                        )))
                    }
                };
                Operation::Update { position, ch }
            }
            "2" => Operation::Query {
                left: position(parts.next())?,
                right: position(parts.next())?,
            },
            other => return Err(Error::Parse(format!("unknown operation tag {other:?}"))),
        };

        if parts.next().is_some() {
            return Err(Error::Parse(format!("trailing input in {line:?}")));
        }
        Ok(op)
    }
}

/// Owns one string, its dual hash index and the inverse-power table.
///
/// Operations are applied in call order; a query observes every earlier update.
#[derive(Debug, Clone)]
pub struct PalindromeOracle {
    params: HashParams,
    index: DualHashIndex,
    inverse_powers: Vec<u64>,
    chars: Vec<char>,
}

impl PalindromeOracle {
    /// Indexes `s`, which must have exactly `n` characters, with the default parameters.
    pub fn new(n: usize, s: &str) -> Result<Self> {
        Self::with_params(n, s, HashParams::default())
    }

    /// Indexes `s` with explicit hash parameters.
    ///
    /// # Errors
    /// `Error::Config` if `n == 0` or `s` does not have `n` characters.
    pub fn with_params(n: usize, s: &str, params: HashParams) -> Result<Self> {
        if n == 0 {
            return Err(Error::Config("string length must be positive".into()));
        }
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != n {
            return Err(Error::Config(format!(
                "declared length {n} but string has {} characters",
                chars.len()
            )));
        }

        let (base, modulus) = (params.base(), params.modulus());
        let powers = power_table(base, n, modulus);
        let inverse_powers = inverse_power_table(base, n, modulus)?;
        let codes: Vec<u32> = chars.iter().map(|&c| u32::from(c)).collect();
        let index = DualHashIndex::build(n, &codes, powers, &params)?;

        debug!("palindrome oracle ready for {n} characters");
        Ok(Self {
            params,
            index,
            inverse_powers,
            chars,
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; an oracle holds at least one character.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn params(&self) -> &HashParams {
        &self.params
    }

    /// Replaces the character at 1-based `position` with `ch`.
    pub fn update(&mut self, position: usize, ch: char) -> Result<()> {
        let i = self.zero_based(position)?;
        self.index.set(i, u32::from(ch))?;
        trace!("update {position}: {:?} -> {ch:?}", self.chars[i]);
        self.chars[i] = ch;
        Ok(())
    }

    /// Whether the 1-based inclusive range `left..=right` is a palindrome.
    ///
    /// `left > right` (both in range) is the empty substring and answers `Yes`.
    pub fn query(&self, left: usize, right: usize) -> Result<Verdict> {
        let l = self.zero_based(left)?;
        let r = self.zero_based(right)?;
        let verdict = Verdict::from(self.probe(l, r)?);
        trace!("query {left}..={right}: {verdict}");
        Ok(verdict)
    }

    /// 0-based form of `query`.
    pub fn probe(&self, l: usize, r: usize) -> Result<bool> {
        let n = self.len();
        for index in [l, r] {
            if index >= n {
                return Err(Error::OutOfBounds { index, len: n });
            }
        }
        let m = self.params.modulus();
        let forward = self.index.forward_hash(l, r)?;
        let backward = self.index.backward_hash(l, r)?;
        let forward = mul_mod(forward, self.inverse_powers[l], m);
        let backward = mul_mod(backward, self.inverse_powers[n - 1 - r], m);
        Ok(forward == backward)
    }

    /// Applies one operation; queries return their verdict, updates return `None`.
    pub fn apply(&mut self, op: &Operation) -> Result<Option<Verdict>> {
        match *op {
            Operation::Update { position, ch } => self.update(position, ch).map(|_| None),
            Operation::Query { left, right } => self.query(left, right).map(Some),
        }
    }

    // 1-based positions report the position as given when out of range.
    fn zero_based(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.len() {
            return Err(Error::OutOfBounds {
                index: position,
                len: self.len(),
            });
        }
        Ok(position - 1)
    }
}

impl fmt::Display for PalindromeOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Builds an oracle over `s` and runs `operations` in order, returning one verdict
/// per query. The first failing operation aborts the batch.
pub fn process_operations(n: usize, operations: &[Operation], s: &str) -> Result<Vec<Verdict>> {
    run(PalindromeOracle::new(n, s)?, operations)
}

fn run(mut oracle: PalindromeOracle, operations: &[Operation]) -> Result<Vec<Verdict>> {
    let mut verdicts = Vec::new();
    for op in operations {
        if let Some(verdict) = oracle.apply(op)? {
            verdicts.push(verdict);
        }
    }
    Ok(verdicts)
}

/// An independent string with its own operation list.
#[derive(Debug, Clone)]
pub struct Session {
    pub initial: String,
    pub operations: Vec<Operation>,
    pub params: HashParams,
}

impl Session {
    pub fn new(initial: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            initial: initial.into(),
            operations,
            params: HashParams::default(),
        }
    }

    pub fn with_params(mut self, params: HashParams) -> Self {
        self.params = params;
        self
    }

    /// Runs the session on a fresh oracle.
    pub fn process(&self) -> Result<Vec<Verdict>> {
        let n = self.initial.chars().count();
        run(
            PalindromeOracle::with_params(n, &self.initial, self.params)?,
            &self.operations,
        )
    }
}

/// Processes independent sessions in parallel. Each session builds its own tables
/// and trees; results are in input order.
pub fn process_sessions(sessions: &[Session]) -> Vec<Result<Vec<Verdict>>> {
    debug!("processing {} sessions", sessions.len());
    sessions.par_iter().map(Session::process).collect()
}
