//! Command implementations

pub mod check;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use solve::{DEFAULT_TILES, solve_puzzle};
