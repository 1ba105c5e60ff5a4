use std::{cell::RefCell, collections::HashMap};
use wordsmith::{definition::decode_entries, DefineError, Definitions, Entry, SpellChecker};

#[derive(Debug, thiserror::Error)]
#[error("{0} word failed to be correctly spellchecked")]
struct SpellCheckErrors(usize);

pub(crate) fn checker(counts: &[(&str, u64)]) -> SpellChecker {
	let _ = pretty_env_logger::try_init();

	SpellChecker::from_counts(counts.iter().copied())
}

/// Check every `(input, expected)` pair against a corrector trained on `counts`
pub(crate) fn test_corrections(
	counts: &[(&str, u64)],
	cases: &[(&str, &str)],
) -> Result<(), Box<dyn std::error::Error>> {
	let checker = checker(counts);

	let errors = cases
		.iter()
		.filter(|(input, expected)| {
			let corrected = checker.correction(input);
			if corrected == *expected {
				log::info!("{input} is indeed corrected to {expected}");
				false
			} else {
				log::error!("{input} is supposed to be corrected to {expected} but got {corrected}");
				true
			}
		})
		.count();

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SpellCheckErrors(errors)))
	}
}

/// In-memory dictionary service answering from JSON bodies
#[derive(Default)]
pub(crate) struct FakeDictionary {
	entries: HashMap<String, Vec<Entry>>,
	pub(crate) asked: RefCell<Vec<String>>,
}

impl FakeDictionary {
	pub(crate) fn with(mut self, word: &str, body: &str) -> Result<Self, DefineError> {
		self.entries.insert(word.to_owned(), decode_entries(body)?);
		Ok(self)
	}
}

impl Definitions for FakeDictionary {
	fn define(&self, word: &str) -> Result<Option<Vec<Entry>>, DefineError> {
		self.asked.borrow_mut().push(word.to_owned());
		Ok(self.entries.get(word).cloned())
	}
}
