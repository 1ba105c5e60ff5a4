//! High level interface to the spelling corrector
//!
//! Entrypoint methods are
//! - [`SpellChecker::probability`]: relative frequency of a word in the corpus
//! - [`SpellChecker::known`]: filters words down to the vocabulary
//! - [`SpellChecker::correction`]: finds the most probable intended word

use crate::corpus::{CorpusError, CorpusFormat, CorpusSource, WordFrequencyTable};
use std::{collections::HashSet, path::Path};

/// Frequency-based spelling corrector over an immutable corpus
#[derive(Debug, Clone)]
pub struct SpellChecker {
	/// Word counts the corrector was trained on
	pub(crate) table: WordFrequencyTable,
}

/// Constructors
impl SpellChecker {
	/// Wrap an already built frequency table
	#[must_use]
	pub const fn new(table: WordFrequencyTable) -> Self {
		Self { table }
	}

	/// Train on natural-language `text`
	///
	/// # Errors
	///
	/// Only fails if the tokenizer cannot be built.
	pub fn from_slice(text: &str) -> Result<Self, CorpusError> {
		WordFrequencyTable::from_text(text).map(Self::new)
	}

	/// Train on explicit `(word, count)` pairs
	pub fn from_counts<I, S>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (S, u64)>,
		S: AsRef<str>,
	{
		Self::new(WordFrequencyTable::from_counts(pairs))
	}

	/// Read the corpus file at `path`
	///
	/// # Errors
	///
	/// Will error if the corpus cannot be read or parsed, see [`CorpusError`].
	pub fn file(path: &Path, format: CorpusFormat) -> Result<Self, CorpusError> {
		WordFrequencyTable::file(path, format).map(Self::new)
	}

	/// Load the corpus described by `source`
	///
	/// # Errors
	///
	/// Same as [`SpellChecker::file`].
	pub fn from_source(source: &CorpusSource) -> Result<Self, CorpusError> {
		Self::file(&source.path, source.format)
	}
}

/// Methods for querying the vocabulary
impl SpellChecker {
	/// Relative frequency of `word`, `0.0` for unknown words
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn probability(&self, word: &str) -> f64 {
		match self.table.total() {
			0 => 0.0,
			total => self.table.count(word) as f64 / total as f64,
		}
	}

	/// Keep only the `words` that appear in the vocabulary
	pub fn known<I, S>(&self, words: I) -> HashSet<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str> + Into<String>,
	{
		words
			.into_iter()
			.filter(|w| self.table.contains(w.as_ref()))
			.map(Into::into)
			.collect()
	}

	/// Underlying frequency table
	#[must_use]
	pub const fn table(&self) -> &WordFrequencyTable {
		&self.table
	}
}
