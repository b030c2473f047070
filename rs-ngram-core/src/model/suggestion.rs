use log::debug;
use serde::Serialize;

use super::autocomplete::AutocompleteModel;
use super::ngram::SEPARATOR;
use crate::error::{NgramError, Result};

/// Smallest n-gram order used for suggestions.
pub const MIN_ORDER: usize = 2;

/// Largest n-gram order used for suggestions. Bounds the cost of a request.
pub const MAX_ORDER: usize = 20;

/// Default order of autocomplete models.
pub const DEFAULT_ORDER: usize = 3;

/// Bounds and default of the number of returned suggestions.
pub const MIN_SUGGESTIONS: usize = 1;
pub const MAX_SUGGESTIONS: usize = 20;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Clamps an n-gram order into `[MIN_ORDER, MAX_ORDER]`.
pub fn clamp_order(n: usize) -> usize {
	n.clamp(MIN_ORDER, MAX_ORDER)
}

/// Clamps a suggestion count into `[MIN_SUGGESTIONS, MAX_SUGGESTIONS]`.
pub fn clamp_max_suggestions(max_suggestions: usize) -> usize {
	max_suggestions.clamp(MIN_SUGGESTIONS, MAX_SUGGESTIONS)
}

/// One ranked next-token suggestion.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Suggestion {
	pub target: String,
	pub probability: f64,
	pub ngram_frequency: usize,
	pub context_frequency: usize,
	/// Context and target joined, as found in the corpus.
	pub ngram: String,
}

/// Suggestions for one query, with the data used to produce them.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SuggestionResponse {
	pub suggestions: Vec<Suggestion>,
	/// Context derived from the partial text.
	pub context: String,
	/// Order of the model that was queried.
	pub n: usize,
	pub total_suggestions: usize,
	/// Distinct n-grams known by the model.
	pub total_ngrams: usize,
}

/// Derives the lookup context of a partial text for order `n`.
///
/// Takes the last `n-1` whitespace-separated words of the lowercased
/// text. With fewer words, all of them are used.
///
/// # Errors
/// Returns `NgramError::EmptyQuery` if the text is blank.
pub fn query_context(partial: &str, n: usize) -> Result<String> {
	let partial = partial.trim().to_lowercase();
	if partial.is_empty() {
		return Err(NgramError::EmptyQuery);
	}

	let words: Vec<&str> = partial.split_whitespace().collect();
	let width = n.saturating_sub(1);
	let context = if n > 1 && words.len() >= width {
		words[words.len() - width..].join(SEPARATOR)
	} else if !words.is_empty() {
		words.join(SEPARATOR)
	} else {
		partial.clone()
	};

	Ok(context)
}

/// Builds an autocomplete model after checking the corpus is long enough.
///
/// `n` is clamped into `[MIN_ORDER, MAX_ORDER]`.
///
/// # Errors
/// Returns `NgramError::InsufficientData` if there are fewer tokens than `n`.
pub fn build_model<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<AutocompleteModel> {
	let n = clamp_order(n);
	if tokens.len() < n {
		return Err(NgramError::InsufficientData { required: n, available: tokens.len() });
	}
	Ok(AutocompleteModel::build(tokens, n))
}

/// Ranks the next tokens for `partial` using an already built model.
///
/// `max_suggestions` is clamped into `[MIN_SUGGESTIONS, MAX_SUGGESTIONS]`.
///
/// # Errors
/// Returns `NgramError::EmptyQuery` if `partial` is blank.
pub fn suggest_from_model(model: &AutocompleteModel, partial: &str, max_suggestions: usize) -> Result<SuggestionResponse> {
	let n = model.order().max(MIN_ORDER);
	let context = query_context(partial, n)?;
	let max_suggestions = clamp_max_suggestions(max_suggestions);

	let suggestions: Vec<Suggestion> = match model.entry(&context) {
		Some(entry) => entry
			.candidates
			.iter()
			.take(max_suggestions)
			.map(|candidate| Suggestion {
				target: candidate.target.clone(),
				probability: candidate.probability,
				ngram_frequency: candidate.frequency,
				context_frequency: entry.context_frequency,
				ngram: format!("{}{}{}", context, SEPARATOR, candidate.target),
			})
			.collect(),
		None => Vec::new(),
	};

	debug!("{} suggestions for context '{}'", suggestions.len(), context);
	Ok(SuggestionResponse {
		total_suggestions: suggestions.len(),
		suggestions,
		context,
		n,
		total_ngrams: model.ngram_count(),
	})
}

/// Suggests next tokens for `partial` from a normalized corpus.
///
/// Convenience over `build_model` + `suggest_from_model`. A blank query
/// is reported before a too short corpus.
///
/// # Errors
/// - `NgramError::EmptyQuery` if `partial` is blank
/// - `NgramError::InsufficientData` if `tokens` is shorter than the clamped `n`
pub fn suggest<S: AsRef<str>>(
	partial: &str,
	tokens: &[S],
	n: usize,
	max_suggestions: usize,
) -> Result<SuggestionResponse> {
	if partial.trim().is_empty() {
		return Err(NgramError::EmptyQuery);
	}
	let model = build_model(tokens, n)?;
	suggest_from_model(&model, partial, max_suggestions)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::normalize;

	#[test]
	fn context_uses_last_words() {
		assert_eq!(query_context("El Gato come", 3).unwrap(), "gato come");
		assert_eq!(query_context("el gato", 2).unwrap(), "gato");
		assert_eq!(query_context("  gato  ", 4).unwrap(), "gato");
	}

	#[test]
	fn blank_query_is_rejected() {
		assert!(matches!(query_context("   ", 2), Err(NgramError::EmptyQuery)));
		let tokens = normalize("el gato come", true);
		assert!(matches!(suggest("", &tokens, 2, 5), Err(NgramError::EmptyQuery)));
	}

	#[test]
	fn suggest_returns_ranked_candidates() {
		let tokens = normalize("el gato come el pescado. el gato duerme.", true);
		let response = suggest("el gato", &tokens, 2, 5).unwrap();

		assert_eq!(response.context, "gato");
		assert_eq!(response.n, 2);
		assert_eq!(response.total_suggestions, 2);
		let targets: Vec<&str> = response.suggestions.iter().map(|s| s.target.as_str()).collect();
		assert_eq!(targets, vec!["come", "duerme"]);
		for suggestion in &response.suggestions {
			assert_eq!(suggestion.probability, 0.5);
			assert_eq!(suggestion.context_frequency, 2);
		}
		assert_eq!(response.suggestions[0].ngram, "gato come");
	}

	#[test]
	fn suggestions_are_truncated() {
		let tokens = normalize("gato come. gato duerme. gato salta. gato come.", true);
		let response = suggest("gato", &tokens, 2, 1).unwrap();
		assert_eq!(response.suggestions.len(), 1);
		assert_eq!(response.suggestions[0].target, "come");
	}

	#[test]
	fn short_corpus_is_insufficient() {
		let tokens = vec!["uno", "dos", "tres"];
		match suggest("uno", &tokens, 5, 5) {
			Err(NgramError::InsufficientData { required, available }) => {
				assert_eq!(required, 5);
				assert_eq!(available, 3);
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn parameters_are_clamped() {
		assert_eq!(clamp_order(0), 2);
		assert_eq!(clamp_order(50), 20);
		assert_eq!(clamp_max_suggestions(0), 1);
		assert_eq!(clamp_max_suggestions(99), 20);

		let tokens = vec!["a", "b", "a", "c"];
		let response = suggest("a", &tokens, 1, 0).unwrap();
		assert_eq!(response.n, 2);
		assert_eq!(response.suggestions.len(), 1);
	}

	#[test]
	fn unknown_context_gives_no_suggestions() {
		let tokens = vec!["a", "b", "c"];
		let response = suggest("zzz", &tokens, 2, 5).unwrap();
		assert!(response.suggestions.is_empty());
		assert_eq!(response.total_ngrams, 2);
	}
}
