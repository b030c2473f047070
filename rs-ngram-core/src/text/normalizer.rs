use unicode_normalization::char::decompose_compatible;

use super::stopwords::is_stopword;

/// Token inserted before each sentence by `normalize_with_boundaries`.
pub const START_MARKER: &str = "<s>";

/// Token inserted after each sentence by `normalize_with_boundaries`.
pub const END_MARKER: &str = "</s>";

/// Letters that keep their form through accent normalization.
const PROTECTED_LETTERS: [char; 4] = ['ñ', 'Ñ', 'ü', 'Ü'];

/// Returns `true` for characters that may appear inside a token.
fn is_token_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == 'ñ' || c == 'ü'
}

/// Removes diacritics from every letter except `ñ` and `ü`.
///
/// Each character is NFKD-decomposed and only the ASCII part of the
/// decomposition is kept, so decorative accents disappear (`á` → `a`)
/// along with anything that has no ASCII form.
pub fn normalize_accents(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		if PROTECTED_LETTERS.contains(&c) {
			out.push(c);
			continue;
		}
		decompose_compatible(c, |d| {
			if d.is_ascii() {
				out.push(d);
			}
		});
	}
	out
}

/// Lowercases and strips accents. Shared first stage of both normalizers.
fn fold(text: &str) -> String {
	normalize_accents(&text.to_lowercase())
}

/// Splits folded text into raw tokens, turning punctuation into separators.
fn raw_tokens(folded: &str) -> impl Iterator<Item = &str> {
	folded
		.split(|c: char| !is_token_char(c))
		.filter(|token| !token.is_empty())
}

/// Stopword and length filter applied to raw tokens.
fn keep_token(token: &str) -> bool {
	token.chars().count() > 1 && !is_stopword(token)
}

/// Normalizes a text into a sequence of tokens.
///
/// - Lowercases and strips accents (except `ñ`/`ü`)
/// - Replaces punctuation and symbols with separators
/// - Splits on whitespace
/// - If `use_stopwords`, drops stopwords and one-character tokens
pub fn normalize(text: &str, use_stopwords: bool) -> Vec<String> {
	let folded = fold(text);
	raw_tokens(&folded)
		.filter(|token| !use_stopwords || keep_token(token))
		.map(str::to_owned)
		.collect()
}

/// Normalizes a text and wraps each sentence with boundary markers.
///
/// Sentences end on runs of `.`, `!` or `?`. Every sentence holding at
/// least one raw token produces `<s>`, its filtered tokens, then `</s>`.
/// Stopword and length filtering are always applied here.
pub fn normalize_with_boundaries(text: &str) -> Vec<String> {
	let folded = fold(text);
	let mut tokens = Vec::new();

	for sentence in folded.split(['.', '!', '?']) {
		let mut words = raw_tokens(sentence).peekable();
		if words.peek().is_none() {
			continue;
		}

		tokens.push(START_MARKER.to_owned());
		tokens.extend(words.filter(|token| keep_token(token)).map(str::to_owned));
		tokens.push(END_MARKER.to_owned());
	}

	tokens
}
