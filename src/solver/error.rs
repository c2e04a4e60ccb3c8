//! Solver error types

use crate::dictionary::DictionaryError;
use std::fmt;

/// The complete enumeration of solve failures
///
/// No failure is retried or swallowed internally; every one surfaces
/// synchronously as a typed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A selected dictionary source could not be loaded
    DictionaryLoad(String),
    /// The caller supplied unusable input (bad tile or minimum length)
    InvalidInput(String),
    /// The search visited more nodes than the configured budget allows
    SearchBudgetExceeded { visited: usize, budget: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryLoad(msg) => write!(f, "Dictionary load failed: {msg}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::SearchBudgetExceeded { visited, budget } => write!(
                f,
                "Search budget exceeded: visited {visited} nodes with a budget of {budget}; \
                 narrow the tile list or raise the budget"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<DictionaryError> for SolveError {
    fn from(err: DictionaryError) -> Self {
        Self::DictionaryLoad(err.to_string())
    }
}
