pub mod hashing;
pub mod string;
pub mod tree;

// Re-export all modules
pub use hashing::*;
pub use string::*;
pub use tree::*;
