//! Logic of the [`SpellChecker`] to correct words

use crate::{edits, SpellChecker};
use std::collections::HashSet;

/// Methods for suggesting words based on the corpus
impl SpellChecker {
	/// Possible corrections for `word`, from the cheapest tier that yields any
	///
	/// 1. the word itself when it is known
	/// 2. known words one edit away
	/// 3. known words two edits away
	/// 4. the word itself, known or not
	///
	/// The returned set is never empty.
	#[must_use]
	pub fn candidates(&self, word: &str) -> HashSet<String> {
		if self.table.contains(word) {
			log::debug!("`{word}` is already known");
			return HashSet::from([word.to_owned()]);
		}

		let edits1 = edits::edits1(word);

		let known = self.known(edits1.iter().map(String::as_str));
		if !known.is_empty() {
			log::debug!("`{word}` has {} known words at distance 1", known.len());
			return known;
		}

		// filter while expanding, the full second distance set is huge
		let known: HashSet<_> = edits1
			.iter()
			.flat_map(|e1| self.known(edits::edit1_variants(e1)))
			.collect();
		if !known.is_empty() {
			log::debug!("`{word}` has {} known words at distance 2", known.len());
			return known;
		}

		log::debug!("`{word}` has no known word within distance 2");
		HashSet::from([word.to_owned()])
	}

	/// Most probable spelling of `word`, or `word` itself when nothing better is known
	///
	/// Among equally probable candidates the lexicographically smallest one wins,
	/// so the result never depends on hash iteration order.
	#[must_use]
	pub fn correction(&self, word: &str) -> String {
		let corrected = self
			.candidates(word)
			.into_iter()
			// probability is proportional to the count, compare the exact integers
			.max_by(|a, b| {
				self.table
					.count(a)
					.cmp(&self.table.count(b))
					.then_with(|| b.cmp(a))
			})
			.unwrap_or_else(|| word.to_owned());

		if corrected != word {
			log::info!("Corrected `{word}` to `{corrected}`");
		}

		corrected
	}
}
