use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::ngram::{self, SEPARATOR};

/// Maximum-likelihood estimate of `P(target | context)` for one n-gram.
///
/// # Invariants
/// - `probability` is in `[0, 1]`
/// - `log_probability <= 0`, or negative infinity when `probability == 0`
/// - `context + " " + target == ngram`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NGramRecord {
	/// The full n-gram, tokens joined by a space.
	pub ngram: String,
	/// The first `n-1` tokens, joined by a space.
	pub context: String,
	/// The last token.
	pub target: String,
	/// Occurrences of the n-gram in the corpus.
	pub ngram_frequency: usize,
	/// Occurrences of the context as an (n-1)-gram.
	pub context_frequency: usize,
	/// `ngram_frequency / context_frequency`, 0 if the context is unseen.
	pub probability: f64,
	/// Natural log of `probability`. Display only.
	pub log_probability: f64,
	/// Order `n` of the n-gram.
	pub order: usize,
}

impl NGramRecord {
	/// Builds the record of `ngram` from its counts.
	///
	/// No smoothing: an unseen context yields a zero probability.
	pub fn new(ngram: &str, ngram_frequency: usize, context_frequency: usize, order: usize) -> Self {
		let (context, target) = match ngram.rsplit_once(SEPARATOR) {
			Some((context, target)) => (context, target),
			None => ("", ngram),
		};

		let probability = if context_frequency > 0 {
			ngram_frequency as f64 / context_frequency as f64
		} else {
			0.0
		};
		let log_probability = if probability > 0.0 { probability.ln() } else { f64::NEG_INFINITY };

		Self {
			ngram: ngram.to_owned(),
			context: context.to_owned(),
			target: target.to_owned(),
			ngram_frequency,
			context_frequency,
			probability,
			log_probability,
			order,
		}
	}

	/// Context tokens, in order.
	pub fn context_tokens(&self) -> impl Iterator<Item = &str> {
		self.context.split(SEPARATOR).filter(|token| !token.is_empty())
	}
}

/// Computes MLE conditional probabilities for every distinct n-gram.
///
/// `P(w_n | w_1..w_{n-1}) = C(w_1..w_n) / C(w_1..w_{n-1})`
///
/// Returns an empty table if `n < 2`. Keys are the n-gram strings; the
/// `BTreeMap` keeps the iteration order stable across calls.
pub fn estimate<S: AsRef<str>>(tokens: &[S], n: usize) -> BTreeMap<String, NGramRecord> {
	if n < 2 {
		return BTreeMap::new();
	}

	let ngram_counts = ngram::count(tokens, n);
	let context_counts = if n == 2 {
		// Unigrams are not produced by `generate`
		ngram::count_items(tokens.iter().map(|token| token.as_ref()))
	} else {
		ngram::count(tokens, n - 1)
	};

	let table: BTreeMap<String, NGramRecord> = ngram_counts
		.iter()
		.map(|(gram, &frequency)| {
			let context = gram.rsplit_once(SEPARATOR).map_or("", |(context, _)| context);
			let context_frequency = context_counts.get(context).copied().unwrap_or(0);
			(gram.clone(), NGramRecord::new(gram, frequency, context_frequency, n))
		})
		.collect();

	debug!("estimated {} distinct {}-grams from {} tokens", table.len(), n, tokens.len());
	table
}

/// Records of `table` sorted by n-gram frequency (descending), then by
/// n-gram string, truncated to `k`.
pub fn top_by_frequency(table: &BTreeMap<String, NGramRecord>, k: usize) -> Vec<NGramRecord> {
	let mut records: Vec<NGramRecord> = table.values().cloned().collect();
	// Stable sort over lexically ordered values keeps ties lexical
	records.sort_by(|a, b| b.ngram_frequency.cmp(&a.ngram_frequency));
	records.truncate(k);
	records
}
