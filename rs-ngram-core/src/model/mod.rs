//! N-gram models built from token sequences.
//!
//! This module provides, from the leaves up:
//! - N-gram generation and counting (`ngram`)
//! - Maximum-likelihood probability tables (`estimator`)
//! - Context → ranked candidates lookup (`autocomplete`)
//! - Next-token suggestions for a partial text (`suggestion`)

/// Sliding-window n-gram generation and frequency counting.
pub mod ngram;

/// MLE conditional probabilities `P(target | context)`.
///
/// No smoothing: unseen contexts have a zero probability.
pub mod estimator;

/// Immutable autocomplete model grouping estimator records by context.
pub mod autocomplete;

/// Suggestion engine: context derivation, parameter clamping and ranking.
pub mod suggestion;

pub use autocomplete::{AutocompleteModel, Candidate, ContextEntry};
pub use estimator::{NGramRecord, estimate};
pub use ngram::generate;
pub use suggestion::{Suggestion, SuggestionResponse, suggest, suggest_from_model};
