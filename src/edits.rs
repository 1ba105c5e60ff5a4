//! Single-character edits of a word
//!
//! Positions are counted in `char`s so non-ASCII input is never split mid code point.

use std::collections::HashSet;

/// Letters tried by replacements and insertions, matching a lowercase corpus
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Every way to cut `word` in two, from `("", word)` to `(word, "")`
fn splits(word: &str) -> Vec<(&str, &str)> {
	word.char_indices()
		.map(|(index, _)| index)
		.chain(std::iter::once(word.len()))
		.map(|index| word.split_at(index))
		.collect()
}

/// All strings one edit away from `word`, duplicates included
///
/// Deletes come first, then transposes, replaces and inserts. For a word of `n`
/// characters this yields `n + (n - 1) + 26n + 26(n + 1)` variants.
#[must_use]
pub fn edit1_variants(word: &str) -> Vec<String> {
	let splits = splits(word);
	let n = splits.len() - 1;
	let mut variants = Vec::with_capacity(n + n.saturating_sub(1) + 26 * (2 * n + 1));

	// deletes
	for (left, right) in &splits {
		let mut rest = right.chars();
		if rest.next().is_some() {
			variants.push(format!("{left}{}", rest.as_str()));
		}
	}

	// transposes
	for (left, right) in &splits {
		let mut rest = right.chars();
		if let (Some(a), Some(b)) = (rest.next(), rest.next()) {
			variants.push(format!("{left}{b}{a}{}", rest.as_str()));
		}
	}

	// replaces
	for (left, right) in &splits {
		let mut rest = right.chars();
		if rest.next().is_some() {
			let rest = rest.as_str();
			variants.extend(ALPHABET.chars().map(|c| format!("{left}{c}{rest}")));
		}
	}

	// inserts
	for (left, right) in &splits {
		variants.extend(ALPHABET.chars().map(|c| format!("{left}{c}{right}")));
	}

	variants
}

/// The deduplicated set of strings one edit away from `word`
#[must_use]
pub fn edits1(word: &str) -> HashSet<String> {
	edit1_variants(word).into_iter().collect()
}

/// The deduplicated set of strings two edits away from `word`
///
/// This grows quadratically with the word length, prefer filtering while
/// generating when only known words matter.
#[must_use]
pub fn edits2(word: &str) -> HashSet<String> {
	edits1(word)
		.iter()
		.flat_map(|e1| edit1_variants(e1))
		.collect()
}
