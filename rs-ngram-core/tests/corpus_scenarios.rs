use rs_ngram_core::io::{read_corpus, read_corpus_or_empty};
use rs_ngram_core::model::suggestion::{DEFAULT_MAX_SUGGESTIONS, build_model, suggest_from_model};
use rs_ngram_core::model::{estimate, suggest};
use rs_ngram_core::text::normalize;
use rs_ngram_core::{NgramError, ProcessingOptions, process};

const CORPUS: &str = "el gato come el pescado. el gato duerme.";

#[test]
fn articles_are_removed_before_counting_bigrams() {
	let tokens = normalize(CORPUS, true);
	assert_eq!(tokens, vec!["gato", "come", "pescado", "gato", "duerme"]);

	let record = &estimate(&tokens, 2)["gato come"];
	assert_eq!(record.ngram_frequency, 1);
	assert_eq!(record.context_frequency, 2);
	assert_eq!(record.probability, 0.5);
}

#[test]
fn gato_is_followed_by_two_equally_likely_words() {
	let tokens = normalize(CORPUS, true);
	let response = suggest("el gato", &tokens, 2, 5).unwrap();

	let ranked: Vec<(&str, f64)> =
		response.suggestions.iter().map(|s| (s.target.as_str(), s.probability)).collect();
	assert_eq!(ranked, vec![("come", 0.5), ("duerme", 0.5)]);
}

#[test]
fn a_shared_model_answers_several_queries() {
	let tokens = normalize("El gato negro come pescado. El gato negro duerme. El perro negro ladra.", true);
	let model = std::sync::Arc::new(build_model(&tokens, 3).unwrap());

	let handles: Vec<_> = ["gato negro", "perro negro"]
		.into_iter()
		.map(|query| {
			let model = std::sync::Arc::clone(&model);
			std::thread::spawn(move || suggest_from_model(&model, query, DEFAULT_MAX_SUGGESTIONS).unwrap())
		})
		.collect();

	let responses: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	assert_eq!(responses[0].suggestions.len(), 2);
	assert_eq!(responses[1].suggestions[0].target, "ladra");
	assert_eq!(responses[1].suggestions[0].probability, 1.0);
}

#[test]
fn three_tokens_cannot_feed_a_five_gram() {
	let tokens = normalize("gato come pescado", true);
	match suggest("gato", &tokens, 5, 5) {
		Err(NgramError::InsufficientData { required, available }) => {
			assert_eq!(required, 5);
			assert_eq!(available, 3);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn empty_corpus_processes_to_empty_tables() {
	for n in [1, 2, 5] {
		for use_boundaries in [false, true] {
			let result = process("", &ProcessingOptions { n, use_boundaries, ..ProcessingOptions::default() });
			assert_eq!(result.total_tokens, 0);
			assert!(result.word_counts.is_empty());
			assert!(result.probabilities.is_empty());
			assert!(result.comparison.is_empty());
		}
	}
}

#[test]
fn unreadable_corpus_behaves_like_an_empty_one() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("perdido.txt");

	assert!(matches!(read_corpus(&path), Err(NgramError::UnreadableInput { .. })));
	let result = process(&read_corpus_or_empty(&path), &ProcessingOptions::default());
	assert_eq!(result.total_tokens, 0);
}

#[test]
fn results_serialize_to_json() {
	let result = process(CORPUS, &ProcessingOptions { n: 2, ..ProcessingOptions::default() });
	let json = serde_json::to_value(&result).unwrap();

	assert_eq!(json["total_tokens"], 5);
	assert_eq!(json["probabilities"]["gato come"]["probability"], 0.5);
	assert_eq!(json["word_counts"][0][0], "gato");
}
