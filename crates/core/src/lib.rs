//! cryptanalysis-sim-core: Educational frequency analysis of an intercepted message
//!
//! This library provides the core components for a learning-focused program that:
//! - Tallies symbol frequencies with an unbalanced binary search tree
//! - Brute-force scans for the multiplier constant of the enemy's hash
//! - Applies a fixed substitution table to guess a partial plaintext
//! - Computes multiplicative and division hash indices per character
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq_tree`: BST keyed by character code with insert-or-increment
//! - `estimator`: linear scan for the constant closest to the golden-ratio fraction
//! - `substitution`: fixed ciphertext-to-plaintext character mapping
//! - `hash`: multiplicative and division hash index calculators
//! - `metrics`: timing of the tree build
//!
//! # Design Principles
//!
//! - **No panics**: fallible operations return structured errors
//! - **Deterministic**: every scan and traversal is a fixed sequence, so
//!   identical inputs always produce identical reports
//! - **Explicit configuration**: hash parameters and search parameters are
//!   plain structs passed in, never global state

pub mod error;
pub mod estimator;
pub mod freq_tree;
pub mod hash;
pub mod metrics;
pub mod substitution;

// Re-export commonly used types
pub use error::{Error, Result};
