//! Word frequency tables built from a reference corpus
//!
//! Two corpus formats are understood:
//! - [`CorpusFormat::Text`]: free natural-language text, tokenized on `\w+`
//! - [`CorpusFormat::Counts`]: a frequency list with one `word count` pair per line

use nom::{
	bytes::complete::is_not,
	character::complete::{space0, space1, u64 as u64_p},
	sequence::tuple,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use regex::Regex;
use std::{
	collections::HashMap,
	fs::File,
	io::{self, Read},
	path::{Path, PathBuf},
};

/// Ways building a [`WordFrequencyTable`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
	/// A frequency list line is malformed
	#[error("Could not parse corpus line {line}: {reason}")]
	Parser {
		/// One-based line number of the offending entry
		line: usize,
		/// What the parser choked on
		reason: String,
	},

	/// Word tokenizer failed to compile
	#[error(transparent)]
	Tokenizer(#[from] regex::Error),

	/// Could not correctly open the corpus file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// How a corpus file is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorpusFormat {
	/// Natural-language text, every `\w+` token counts once
	#[default]
	Text,
	/// `word count` pairs, one per line
	Counts,
}

/// Where to find the corpus the corrector is trained on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
	/// Path to the corpus file
	pub path: PathBuf,
	/// Layout of the file at `path`
	pub format: CorpusFormat,
}

impl CorpusSource {
	/// Describe a corpus file at `path` with the given layout
	pub fn new(path: impl Into<PathBuf>, format: CorpusFormat) -> Self {
		Self {
			path: path.into(),
			format,
		}
	}
}

/// Mapping from lowercase word to its number of occurrences in the corpus
///
/// Every stored count is at least one, entries counted zero times are never kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
	counts: HashMap<String, u64>,
	total: u64,
}

/// Constructors
impl WordFrequencyTable {
	/// Lowercase `text` and count every `\w+` token in it
	///
	/// # Errors
	///
	/// Only fails if the tokenizer pattern cannot be compiled.
	pub fn from_text(text: &str) -> Result<Self, CorpusError> {
		let tokenizer = Regex::new(r"\w+")?;
		let text = text.to_lowercase();

		Ok(Self::from_counts(
			tokenizer.find_iter(&text).map(|m| (m.as_str(), 1)),
		))
	}

	/// Parse a frequency list made of `word count` lines
	///
	/// Blank lines are skipped, duplicated words add up.
	///
	/// # Errors
	///
	/// Will error on the first line that is not a word followed by an unsigned count.
	pub fn from_frequency_list(text: &str) -> Result<Self, CorpusError> {
		let mut entries = Vec::new();

		for (index, line) in text.lines().enumerate() {
			if line.trim().is_empty() {
				continue;
			}

			let (_, entry) = parse_entry(line).map_err(|e| CorpusError::Parser {
				line: index + 1,
				reason: e.to_string(),
			})?;
			entries.push(entry);
		}

		Ok(Self::from_counts(entries))
	}

	/// Collect `(word, count)` pairs, words are lowercased and zero counts dropped
	pub fn from_counts<I, S>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (S, u64)>,
		S: AsRef<str>,
	{
		let mut counts: HashMap<String, u64> = HashMap::new();

		for (word, count) in pairs {
			if count == 0 {
				continue;
			}
			let entry = counts.entry(word.as_ref().to_lowercase()).or_default();
			*entry = entry.saturating_add(count);
		}

		// saturating, every count stays within the total
		let total = counts.values().fold(0, |total: u64, count| total.saturating_add(*count));
		Self { counts, total }
	}

	/// Read and parse the corpus file at `path`
	///
	/// # Errors
	///
	/// Will error if the file cannot be read or, for [`CorpusFormat::Counts`],
	/// if it is not a well-formed frequency list.
	pub fn file(path: &Path, format: CorpusFormat) -> Result<Self, CorpusError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;

		let table = match format {
			CorpusFormat::Text => Self::from_text(&buffer)?,
			CorpusFormat::Counts => Self::from_frequency_list(&buffer)?,
		};

		log::info!(
			"Loaded {} distinct words ({} occurrences) from `{}`",
			table.len(),
			table.total(),
			path.display()
		);

		Ok(table)
	}
}

/// Accessors
impl WordFrequencyTable {
	/// Number of times `word` was seen, zero when unknown
	#[must_use]
	pub fn count(&self, word: &str) -> u64 {
		self.counts.get(word).copied().unwrap_or_default()
	}

	/// Whether `word` belongs to the vocabulary
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.counts.contains_key(word)
	}

	/// Sum of every count in the table
	#[must_use]
	pub const fn total(&self) -> u64 {
		self.total
	}

	/// Number of distinct words
	#[must_use]
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Whether the vocabulary is empty
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterate over the vocabulary, in no particular order
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.counts.keys().map(String::as_str)
	}
}

/// Parse a `word count` frequency list line
fn parse_entry(i: &str) -> IResult<&str, (&str, u64)> {
	space0
		.precedes(tuple((is_not(" \t"), space1.precedes(u64_p))))
		.terminated(space0)
		.all_consuming()
		.parse(i)
}
