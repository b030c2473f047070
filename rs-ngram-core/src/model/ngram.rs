use std::collections::HashMap;

/// Separator between the tokens of an n-gram string.
pub const SEPARATOR: &str = " ";

/// Generates all contiguous n-grams of `tokens`, left to right.
///
/// Each n-gram is its `n` tokens joined by a single space.
/// Returns an empty vector if `n <= 1` or there are fewer than `n` tokens.
pub fn generate<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
	if n <= 1 || tokens.len() < n {
		return Vec::new();
	}

	tokens
		.windows(n)
		.map(|window| {
			let mut gram = String::new();
			for (i, token) in window.iter().enumerate() {
				if i > 0 {
					gram.push_str(SEPARATOR);
				}
				gram.push_str(token.as_ref());
			}
			gram
		})
		.collect()
}

/// Counts occurrences of each distinct item.
pub fn count_items<I, S>(items: I) -> HashMap<String, usize>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut counts = HashMap::new();
	for item in items {
		*counts.entry(item.into()).or_insert(0) += 1;
	}
	counts
}

/// Counts occurrences of each distinct n-gram of order `n`.
///
/// Same emptiness rules as `generate`.
pub fn count<S: AsRef<str>>(tokens: &[S], n: usize) -> HashMap<String, usize> {
	count_items(generate(tokens, n))
}

/// Returns the `k` most frequent entries of `counts`.
///
/// Sorted by count (descending), ties broken by the key (ascending)
/// so the output does not depend on hash map iteration order.
pub fn most_common(counts: &HashMap<String, usize>, k: usize) -> Vec<(String, usize)> {
	let mut entries: Vec<(String, usize)> = counts.iter().map(|(key, count)| (key.clone(), *count)).collect();
	entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	entries.truncate(k);
	entries
}
