//! Quartiles solving pipeline
//!
//! Generation, classification, and aggregation, plus the engine that runs
//! them against one dictionary snapshot.

pub mod aggregator;
pub mod classifier;
mod engine;
mod error;
pub mod generator;

pub use classifier::{ConsensusTagging, TagPolicy, classify, classify_with};
pub use engine::{MIN_LENGTH_RANGE, Solver};
pub use error::SolveError;
pub use generator::{Candidate, DEFAULT_NODE_BUDGET, generate};
