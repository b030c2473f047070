use std::collections::BTreeMap;

use proptest::prelude::*;
use rs_ngram_core::model::{AutocompleteModel, estimate, generate};
use rs_ngram_core::text::normalize;

fn token_sequence() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-d]{1,2}", 0..40)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn gram_count_matches_window_count(tokens in token_sequence(), n in 0usize..7) {
		let expected = if n >= 2 && tokens.len() >= n { tokens.len() - n + 1 } else { 0 };
		prop_assert_eq!(generate(&tokens, n).len(), expected);
	}

	#[test]
	fn probabilities_are_bounded_and_positive(tokens in token_sequence(), n in 2usize..5) {
		for record in estimate(&tokens, n).values() {
			prop_assert!(record.probability > 0.0 && record.probability <= 1.0);
			prop_assert!(record.log_probability <= 0.0);
			prop_assert!(record.context_frequency >= record.ngram_frequency);
		}
	}

	#[test]
	fn context_distributions_sum_to_one(tokens in token_sequence(), n in 2usize..5) {
		let mut sums: BTreeMap<String, f64> = BTreeMap::new();
		for record in estimate(&tokens, n).values() {
			*sums.entry(record.context.clone()).or_insert(0.0) += record.probability;
		}
		for (context, sum) in sums {
			// The last (n-1)-gram of the corpus has no successor, its mass is missing
			let last_context = tokens[tokens.len() - (n - 1)..].join(" ");
			if context != last_context {
				prop_assert!((sum - 1.0).abs() < 1e-9, "context {:?} sums to {}", context, sum);
			} else {
				prop_assert!(sum <= 1.0 + 1e-9);
			}
		}
	}

	#[test]
	fn records_round_trip_to_their_ngram(tokens in token_sequence(), n in 2usize..5) {
		for (ngram, record) in estimate(&tokens, n) {
			prop_assert_eq!(format!("{} {}", record.context, record.target), ngram);
			prop_assert_eq!(record.context_tokens().count(), n - 1);
		}
	}

	#[test]
	fn model_candidates_are_sorted(tokens in token_sequence(), n in 2usize..4) {
		let model = AutocompleteModel::build(&tokens, n);
		for context in model.contexts() {
			let candidates = model.candidates(context);
			prop_assert!(!candidates.is_empty());
			for pair in candidates.windows(2) {
				prop_assert!(pair[0].probability >= pair[1].probability);
			}
		}
	}

	#[test]
	fn normalization_is_idempotent(text in "[a-zA-Z áéíóúñüÑÜ.,;!?¿¡0-9_-]{0,80}", use_stopwords in any::<bool>()) {
		let once = normalize(&text, use_stopwords);
		prop_assert_eq!(normalize(&once.join(" "), use_stopwords), once);
	}
}
