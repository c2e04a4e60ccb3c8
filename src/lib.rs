//! Quartiles Solver
//!
//! Finds every valid word obtainable by concatenating 1 to 4 puzzle tiles,
//! using a prefix-pruned depth-first search over ordered tile selections.
//!
//! # Quick Start
//!
//! ```rust
//! use quartiles_solver::core::tiles_from_strings;
//! use quartiles_solver::dictionary::{Dictionary, DictionarySelection};
//! use quartiles_solver::solver::Solver;
//!
//! let dictionary = Dictionary::embedded(DictionarySelection::Both).unwrap();
//! let solver = Solver::new(&dictionary);
//!
//! let tiles = tiles_from_strings(&["qu", "est", "ion"]).unwrap();
//! let result = solver.solve(&tiles, 2).unwrap();
//! assert!(result.results().any(|r| r.word == "question"));
//! ```

// Core domain types
pub mod core;

// Dictionary store and prefix index
pub mod dictionary;

// Solving pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Host-facing settings record
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
