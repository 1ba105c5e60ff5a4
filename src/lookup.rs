//! Definition lookup with spelling correction as a fallback

use crate::{
	corpus::{CorpusError, CorpusSource},
	definition::{DefineError, Definitions},
	format::{format_entries, DEFAULT_WIDTH},
	SpellChecker,
};
use std::cell::OnceCell;

/// Informs why a lookup could not produce any output
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	/// Corrector could not be trained
	#[error("Could not load spelling corpus: {0}")]
	Corpus(#[from] CorpusError),

	/// Dictionary service could not be queried
	#[error(transparent)]
	Define(#[from] DefineError),
}

/// Looks words up in a [`Definitions`] source, correcting misspelled words on a miss
///
/// The [`SpellChecker`] is only trained the first time a correction is needed.
pub struct Lookup<D> {
	definitions: D,
	corpus: CorpusSource,
	checker: OnceCell<SpellChecker>,
	width: usize,
}

impl<D: Definitions> Lookup<D> {
	/// Query `definitions`, training the corrector on `corpus` when needed
	pub fn new(definitions: D, corpus: CorpusSource) -> Self {
		Self {
			definitions,
			corpus,
			checker: OnceCell::new(),
			width: DEFAULT_WIDTH,
		}
	}

	/// Use an already trained corrector instead of loading the corpus
	#[must_use]
	pub fn with_checker(self, checker: SpellChecker) -> Self {
		Self {
			checker: OnceCell::from(checker),
			..self
		}
	}

	/// Wrap definitions at `width` columns
	#[must_use]
	pub fn with_width(mut self, width: usize) -> Self {
		self.width = width;
		self
	}

	/// Text to show the user for `word`
	///
	/// When `word` has no definition, the most probable correction is looked up
	/// instead and a notice naming it is prepended.
	///
	/// # Errors
	///
	/// Check [`LookupError`] to see all the ways this function breaks
	pub fn lookup(&self, word: &str) -> Result<String, LookupError> {
		let mut output = String::new();

		let mut entries = self.definitions.define(word)?;

		if entries.is_none() {
			let corrected = self.checker()?.correction(word);

			if corrected == word {
				output.push_str(&format!(
					"Couldn't find a definition for '{word}', I'm not sure what you meant."
				));
			} else {
				output.push_str(&format!(
					"Couldn't find a definition for '{word}', you must've meant '{corrected}'."
				));
				entries = self.definitions.define(&corrected)?;
			}
		}

		if let Some(entries) = entries {
			output.push_str(&format_entries(&entries, self.width));
		}

		Ok(output)
	}

	/// Corrector, trained on first use
	fn checker(&self) -> Result<&SpellChecker, CorpusError> {
		if let Some(checker) = self.checker.get() {
			return Ok(checker);
		}

		log::debug!("Training spell checker on `{}`", self.corpus.path.display());
		let checker = SpellChecker::from_source(&self.corpus)?;
		Ok(self.checker.get_or_init(|| checker))
	}
}
