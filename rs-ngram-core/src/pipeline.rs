use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NgramError, Result};
use crate::model::estimator::{self, NGramRecord};
use crate::model::ngram;
use crate::model::suggestion::clamp_order;
use crate::text::{normalize, normalize_with_boundaries};

/// Size of the word and n-gram frequency tables.
pub const TOP_COUNTS: usize = 20;

/// Records kept by a training report.
pub const TOP_TRAINED: usize = 50;

/// Records kept per side of a boundary comparison.
pub const TOP_COMPARED: usize = 15;

/// Largest order accepted by `process`. Larger values are clamped.
pub const MAX_ANALYSIS_ORDER: usize = 100;

/// Probability table keyed by n-gram.
pub type ProbabilityTable = BTreeMap<String, NGramRecord>;

/// Options of a `process` call.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ProcessingOptions {
	/// Primary n-gram order. `1` only computes word frequencies.
	pub n: usize,
	/// Wrap sentences with `<s>` / `</s>` markers.
	pub use_boundaries: bool,
	/// Remove stopwords and one-character tokens (plain normalizer only).
	pub use_stopwords: bool,
	/// Extra orders computed for side-by-side comparison.
	pub comparison_orders: Vec<usize>,
}

impl Default for ProcessingOptions {
	fn default() -> Self {
		Self { n: 1, use_boundaries: false, use_stopwords: true, comparison_orders: vec![2, 3, 4, 5] }
	}
}

/// Everything derived from a corpus by `process`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProcessingResult {
	/// Most frequent tokens.
	pub word_counts: Vec<(String, usize)>,
	/// Most frequent n-grams of the primary order.
	pub ngram_counts: Vec<(String, usize)>,
	/// MLE table of the primary order.
	pub probabilities: ProbabilityTable,
	/// MLE tables of the comparison orders, by order.
	pub comparison: BTreeMap<usize, ProbabilityTable>,
	pub total_tokens: usize,
	/// Cleaned token sequence.
	pub tokens: Vec<String>,
	pub n: usize,
	pub use_boundaries: bool,
	pub comparison_orders: Vec<usize>,
}

/// Normalizes a text with or without sentence boundaries.
pub fn tokenize(text: &str, use_boundaries: bool, use_stopwords: bool) -> Vec<String> {
	if use_boundaries {
		normalize_with_boundaries(text)
	} else {
		normalize(text, use_stopwords)
	}
}

/// Processes a raw corpus into frequency and probability tables.
///
/// Never fails: an empty or too short corpus yields empty tables.
/// `options.n` is clamped into `[1, MAX_ANALYSIS_ORDER]`.
pub fn process(text: &str, options: &ProcessingOptions) -> ProcessingResult {
	let n = options.n.clamp(1, MAX_ANALYSIS_ORDER);
	let tokens = tokenize(text, options.use_boundaries, options.use_stopwords);

	let word_counts = ngram::most_common(&ngram::count_items(tokens.iter().map(String::as_str)), TOP_COUNTS);

	let mut ngram_counts = Vec::new();
	let mut probabilities = ProbabilityTable::new();
	if n > 1 && tokens.len() >= n {
		ngram_counts = ngram::most_common(&ngram::count(&tokens, n), TOP_COUNTS);
		probabilities = estimator::estimate(&tokens, n);
	}

	let mut comparison = BTreeMap::new();
	for &order in &options.comparison_orders {
		if order >= 2 && order != n && tokens.len() >= order && !comparison.contains_key(&order) {
			comparison.insert(order, estimator::estimate(&tokens, order));
		}
	}

	debug!(
		"processed {} tokens: {} {}-grams, {} comparison orders",
		tokens.len(),
		probabilities.len(),
		n,
		comparison.len()
	);

	ProcessingResult {
		word_counts,
		ngram_counts,
		probabilities,
		comparison,
		total_tokens: tokens.len(),
		tokens,
		n,
		use_boundaries: options.use_boundaries,
		comparison_orders: options.comparison_orders.clone(),
	}
}

/// Most frequent records of a model trained at one order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrainingReport {
	pub n: usize,
	pub use_boundaries: bool,
	/// Up to `TOP_TRAINED` records, most frequent first.
	pub top_records: Vec<NGramRecord>,
	/// Distinct n-grams in the model.
	pub total_ngrams: usize,
	pub tokens: Vec<String>,
}

/// Trains an n-gram table and reports its most frequent records.
///
/// `n` is clamped into `[2, 20]`.
///
/// # Errors
/// Returns `NgramError::InsufficientData` if the corpus has fewer tokens than `n`.
pub fn train(text: &str, n: usize, use_boundaries: bool) -> Result<TrainingReport> {
	let n = clamp_order(n);
	let tokens = tokenize(text, use_boundaries, true);
	if tokens.len() < n {
		return Err(NgramError::InsufficientData { required: n, available: tokens.len() });
	}

	let table = estimator::estimate(&tokens, n);
	Ok(TrainingReport {
		n,
		use_boundaries,
		top_records: estimator::top_by_frequency(&table, TOP_TRAINED),
		total_ngrams: table.len(),
		tokens,
	})
}

/// One side of a boundary comparison.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CorpusView {
	pub tokens: Vec<String>,
	pub total_tokens: usize,
	pub probabilities: ProbabilityTable,
	/// Up to `TOP_COMPARED` records, most frequent first.
	pub top_records: Vec<NGramRecord>,
	pub total_ngrams: usize,
}

impl CorpusView {
	fn new(tokens: Vec<String>, n: usize) -> Self {
		let probabilities = estimator::estimate(&tokens, n);
		Self {
			total_tokens: tokens.len(),
			top_records: estimator::top_by_frequency(&probabilities, TOP_COMPARED),
			total_ngrams: probabilities.len(),
			probabilities,
			tokens,
		}
	}
}

/// The same corpus modeled with and without sentence boundaries.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BoundaryComparison {
	pub n: usize,
	pub without_boundaries: CorpusView,
	pub with_boundaries: CorpusView,
}

/// Compares MLE tables of order `n` with and without sentence boundaries.
///
/// `n` is clamped into `[2, 20]`.
pub fn compare_boundaries(text: &str, n: usize) -> BoundaryComparison {
	let n = clamp_order(n);
	BoundaryComparison {
		n,
		without_boundaries: CorpusView::new(normalize(text, true), n),
		with_boundaries: CorpusView::new(normalize_with_boundaries(text), n),
	}
}
