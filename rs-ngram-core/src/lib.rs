//! Word-level n-gram modeling library.
//!
//! This crate provides a small natural-language n-gram engine including:
//! - Spanish text normalization (accents, punctuation, stopwords, sentence boundaries)
//! - N-gram generation and frequency counting
//! - Maximum-likelihood conditional probabilities
//! - Autocomplete models and ranked next-word suggestions
//! - A processing pipeline returning every derived table at once
//!
//! All computations are pure functions of their inputs: results are
//! built per call and can be shared read-only between threads.

/// Error type shared by the whole crate.
pub mod error;

/// Corpus I/O (file reading, corpus listing, path helpers).
pub mod io;

/// Text normalization into tokens.
pub mod text;

/// N-gram counting, probability estimation and suggestion logic.
pub mod model;

/// One-call processing of a raw corpus.
///
/// Combines normalization, counting and estimation, plus the training
/// and boundary comparison reports.
pub mod pipeline;

pub use error::{NgramError, Result};
pub use pipeline::{ProcessingOptions, ProcessingResult, process};
