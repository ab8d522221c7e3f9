pub mod cs;
pub mod error;

pub use cs::{hashing, string, tree};
pub use error::{Error, Result};

pub use cs::hashing::params::{HashParams, HashParamsBuilder};
pub use cs::string::palindrome_queries::{
    process_operations, process_sessions, Operation, PalindromeOracle, Session, Verdict,
};
