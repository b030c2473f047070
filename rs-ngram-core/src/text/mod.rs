//! Text normalization: from raw text to tokens.
//!
//! - Accent folding that keeps `ñ` and `ü`
//! - Punctuation removal and whitespace tokenization
//! - Spanish stopword filtering
//! - Optional sentence-boundary markers

/// Normalizers producing token sequences.
pub mod normalizer;

/// Fixed Spanish stopword set.
pub mod stopwords;

/// Before/after statistics of normalization.
pub mod report;

pub use normalizer::{END_MARKER, START_MARKER, normalize, normalize_accents, normalize_with_boundaries};
pub use report::{PreprocessingReport, preprocessing_report};
