use std::collections::BTreeSet;

use serde::Serialize;

use super::normalizer::normalize;

/// Maximum number of accented words listed in a report.
const MAX_ACCENTED_WORDS: usize = 20;

/// Accented and special Spanish letters, lower and upper case.
const SPANISH_LETTERS: &str = "áéíóúÁÉÍÓÚñÑüÜ";

/// Summary of what normalization removed from a raw text.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PreprocessingReport {
	/// Number of words in the raw text (runs of Latin letters).
	pub original_word_count: usize,
	/// Number of tokens after normalization with stopwords removed.
	pub cleaned_token_count: usize,
	/// `original_word_count - cleaned_token_count`, floored at 0.
	pub removed_word_count: usize,
	/// Symbols dropped by normalization, sorted.
	pub removed_symbols: Vec<char>,
	/// Words of the raw text that carried an accent, `ñ` or `ü`.
	pub accented_words: Vec<String>,
	/// Normalized tokens joined by a space.
	pub cleaned_text: String,
}

fn is_spanish_letter(c: char) -> bool {
	c.is_ascii_alphabetic() || SPANISH_LETTERS.contains(c)
}

/// Words of `text` as runs of ASCII letters and Spanish accented letters.
fn original_words(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !is_spanish_letter(c))
		.filter(|word| !word.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Builds a `PreprocessingReport` for `text`.
pub fn preprocessing_report(text: &str) -> PreprocessingReport {
	let tokens = normalize(text, true);
	let words = original_words(text);

	let removed_symbols: BTreeSet<char> = text
		.chars()
		.filter(|&c| !(c.is_alphanumeric() || c == '_' || c.is_whitespace() || SPANISH_LETTERS.contains(c)))
		.collect();

	let accented_words = words
		.iter()
		.filter(|word| word.chars().any(|c| SPANISH_LETTERS.contains(c)))
		.take(MAX_ACCENTED_WORDS)
		.cloned()
		.collect();

	PreprocessingReport {
		original_word_count: words.len(),
		cleaned_token_count: tokens.len(),
		removed_word_count: words.len().saturating_sub(tokens.len()),
		removed_symbols: removed_symbols.into_iter().collect(),
		accented_words,
		cleaned_text: tokens.join(" "),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn report_counts_removed_words_and_symbols() {
		let report = preprocessing_report("¡El niño comió pescado, y el gato también!");

		assert_eq!(report.original_word_count, 8);
		assert_eq!(report.cleaned_text, "niño comio pescado gato");
		assert_eq!(report.cleaned_token_count, 4);
		assert_eq!(report.removed_word_count, 4);
		assert_eq!(report.removed_symbols, vec!['!', ',', '¡']);
		assert_eq!(report.accented_words, vec!["niño", "comió", "también"]);
	}

	#[test]
	fn empty_text_gives_empty_report() {
		let report = preprocessing_report("");
		assert_eq!(report.original_word_count, 0);
		assert_eq!(report.removed_word_count, 0);
		assert!(report.removed_symbols.is_empty());
		assert!(report.cleaned_text.is_empty());
	}

	#[test]
	fn accented_word_list_is_capped() {
		let text = "canción ".repeat(30);
		assert_eq!(preprocessing_report(&text).accented_words.len(), MAX_ACCENTED_WORDS);
	}
}
