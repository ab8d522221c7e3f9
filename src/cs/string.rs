//! String algorithms.
//!
//! - `dual_hash_index`: forward/backward rolling-hash segment trees over one string
//! - `palindrome_queries`: dynamic palindrome-substring oracle with point edits

pub mod dual_hash_index;
pub mod palindrome_queries;

pub use dual_hash_index::DualHashIndex;
pub use palindrome_queries::{
    process_operations, process_sessions, Operation, PalindromeOracle, Session, Verdict,
};
