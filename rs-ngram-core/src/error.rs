use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the n-gram engine.
///
/// Numeric parameters (orders, suggestion counts) are clamped into range
/// instead of being rejected, so `InvalidParameter` only covers values
/// that cannot be clamped.
#[derive(Debug, Error)]
pub enum NgramError {
	/// The cleaned corpus is shorter than the requested n-gram order.
	#[error("not enough tokens for {required}-grams: only {available} available")]
	InsufficientData { required: usize, available: usize },

	/// The partial text given to the suggestion engine is empty or blank.
	#[error("empty query")]
	EmptyQuery,

	/// A parameter that has no meaningful clamped value.
	#[error("invalid parameter '{name}': {reason}")]
	InvalidParameter { name: String, reason: String },

	/// The corpus could not be read from storage.
	#[error("unable to read corpus '{}': {source}", path.display())]
	UnreadableInput {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Any other failure, with context.
	#[error("processing failed: {0}")]
	Processing(String),
}

impl NgramError {
	pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
		Self::InvalidParameter { name: name.to_owned(), reason: reason.into() }
	}
}

pub type Result<T> = std::result::Result<T, NgramError>;
