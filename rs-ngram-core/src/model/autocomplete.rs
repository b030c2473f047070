use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::estimator::{self, NGramRecord};

/// A possible next token for a context.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Candidate {
	pub target: String,
	pub probability: f64,
	/// Occurrences of `context + target` in the corpus.
	pub frequency: usize,
}

/// Ranked candidates sharing one context.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContextEntry {
	/// Occurrences of the context as an (n-1)-gram.
	pub context_frequency: usize,
	/// Sorted by `ranking`.
	pub candidates: Vec<Candidate>,
}

/// Ranking order of candidates: probability (descending), then
/// frequency (descending), then target (ascending).
pub fn ranking(a: &Candidate, b: &Candidate) -> Ordering {
	b.probability
		.total_cmp(&a.probability)
		.then_with(|| b.frequency.cmp(&a.frequency))
		.then_with(|| a.target.cmp(&b.target))
}

/// Next-token lookup table built from one corpus at a fixed order `n`.
///
/// Maps a context (the `n-1` preceding tokens, space-joined) to its
/// ranked candidates. Immutable once built, so a host may share it
/// between threads behind an `Arc`.
///
/// # Invariants
/// - `order >= 2`, or the model is empty
/// - Every candidate list is non-empty and sorted by `ranking`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct AutocompleteModel {
	order: usize,
	contexts: BTreeMap<String, ContextEntry>,
}

impl AutocompleteModel {
	/// Builds the model of order `n` from a token sequence.
	///
	/// Returns an empty model if `n < 2`.
	pub fn build<S: AsRef<str>>(tokens: &[S], n: usize) -> Self {
		if n < 2 {
			return Self::default();
		}
		Self::from_records(estimator::estimate(tokens, n).into_values(), n)
	}

	/// Groups estimator records by context and ranks each group.
	pub fn from_records<I: IntoIterator<Item = NGramRecord>>(records: I, n: usize) -> Self {
		let mut contexts: BTreeMap<String, ContextEntry> = BTreeMap::new();

		for record in records {
			let entry = contexts.entry(record.context).or_insert_with(|| ContextEntry {
				context_frequency: record.context_frequency,
				candidates: Vec::new(),
			});
			entry.candidates.push(Candidate {
				target: record.target,
				probability: record.probability,
				frequency: record.ngram_frequency,
			});
		}

		for entry in contexts.values_mut() {
			entry.candidates.sort_by(ranking);
		}

		debug!("built {}-gram autocomplete model with {} contexts", n, contexts.len());
		Self { order: n, contexts }
	}

	/// Order `n` of the underlying n-grams (0 for an empty default model).
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Number of distinct n-grams in the model.
	pub fn ngram_count(&self) -> usize {
		self.contexts.values().map(|entry| entry.candidates.len()).sum()
	}

	/// Iterates over known contexts in lexical order.
	pub fn contexts(&self) -> impl Iterator<Item = &str> {
		self.contexts.keys().map(String::as_str)
	}

	pub fn entry(&self, context: &str) -> Option<&ContextEntry> {
		self.contexts.get(context)
	}

	/// Ranked candidates following `context`, empty if the context is unknown.
	pub fn candidates(&self, context: &str) -> &[Candidate] {
		match self.contexts.get(context) {
			Some(entry) => &entry.candidates,
			None => &[],
		}
	}

	/// Ranked `(target, probability)` pairs following `context`.
	pub fn predict_next(&self, context: &str) -> Vec<(&str, f64)> {
		self.candidates(context)
			.iter()
			.map(|candidate| (candidate.target.as_str(), candidate.probability))
			.collect()
	}
}
