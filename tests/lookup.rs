mod utils;

use std::io::Write;
use wordsmith::{
	CorpusError, CorpusFormat, CorpusSource, DefineError, Definitions, Entry, Lookup, LookupError,
	SpellChecker,
};

const DATA: &str = r#"[{
	"word": "data",
	"meanings": [{
		"partOfSpeech": "noun",
		"definitions": [{
			"definition": "facts and statistics collected together for reference or analysis.",
			"synonyms": ["facts", "figures", "statistics"]
		}]
	}]
}]"#;

fn nowhere() -> CorpusSource {
	CorpusSource::new("/nonexistent/big.txt", CorpusFormat::Text)
}

#[test]
fn found_word_is_formatted() -> Result<(), Box<dyn std::error::Error>> {
	let dictionary = utils::FakeDictionary::default().with("data", DATA)?;
	let output = Lookup::new(dictionary, nowhere()).lookup("data")?;

	let expected = format!(
		"\n\n{}\nData\n\n1. (Noun): facts and statistics collected together for reference or analysis.\n\n      Synonyms:\n      facts, figures, statistics",
		"=".repeat(80)
	);
	assert_eq!(output, expected);

	Ok(())
}

#[test]
fn misspelled_word_is_retried() -> Result<(), Box<dyn std::error::Error>> {
	let dictionary = utils::FakeDictionary::default().with("data", DATA)?;
	let lookup = Lookup::new(&dictionary, nowhere())
		.with_checker(utils::checker(&[("data", 12), ("date", 3)]))
		.with_width(40);

	let output = lookup.lookup("dats")?;

	assert_eq!(*dictionary.asked.borrow(), ["dats", "data"]);

	assert!(output.starts_with("Couldn't find a definition for 'dats', you must've meant 'data'.\n\n"));
	assert!(output.ends_with(
		"\nData\n\n1. (Noun): facts and statistics\n   collected together for reference or\n   analysis.\n\n      Synonyms:\n      facts, figures, statistics"
	));

	Ok(())
}

#[test]
fn hopeless_word_is_reported() -> Result<(), Box<dyn std::error::Error>> {
	let dictionary = utils::FakeDictionary::default().with("data", DATA)?;
	let lookup = Lookup::new(dictionary, nowhere()).with_checker(utils::checker(&[("data", 12)]));

	let output = lookup.lookup("qwxyz")?;

	assert_eq!(
		output,
		"Couldn't find a definition for 'qwxyz', I'm not sure what you meant."
	);

	Ok(())
}

#[test]
fn correction_without_definition_only_reports() -> Result<(), Box<dyn std::error::Error>> {
	let dictionary = utils::FakeDictionary::default();
	let lookup = Lookup::new(dictionary, nowhere()).with_checker(utils::checker(&[("data", 12)]));

	let output = lookup.lookup("dta")?;

	assert_eq!(
		output,
		"Couldn't find a definition for 'dta', you must've meant 'data'."
	);

	Ok(())
}

#[test]
fn corpus_is_loaded_from_disk_once() -> Result<(), Box<dyn std::error::Error>> {
	let mut corpus = tempfile::NamedTempFile::new()?;
	writeln!(corpus, "data 12\ndate 3")?;

	let dictionary = utils::FakeDictionary::default().with("data", DATA)?;
	let lookup = Lookup::new(
		dictionary,
		CorpusSource::new(corpus.path(), CorpusFormat::Counts),
	);

	assert!(lookup.lookup("dats")?.contains("you must've meant 'data'"));

	// a loaded corrector survives its file
	corpus.close()?;
	assert!(lookup.lookup("dsta")?.contains("you must've meant 'data'"));

	Ok(())
}

#[test]
fn service_errors_are_propagated() {
	struct Broken;
	impl Definitions for Broken {
		fn define(&self, _: &str) -> Result<Option<Vec<Entry>>, DefineError> {
			Err(DefineError::InvalidUrl("broken".into()))
		}
	}

	let lookup = Lookup::new(Broken, nowhere()).with_checker(SpellChecker::from_counts([("a", 1)]));

	assert!(matches!(
		lookup.lookup("anything"),
		Err(LookupError::Define(DefineError::InvalidUrl(_)))
	));
}

#[test]
fn malformed_corpus_is_a_lookup_error() -> Result<(), Box<dyn std::error::Error>> {
	let mut corpus = tempfile::NamedTempFile::new()?;
	writeln!(corpus, "data twelve")?;

	let lookup = Lookup::new(
		utils::FakeDictionary::default(),
		CorpusSource::new(corpus.path(), CorpusFormat::Counts),
	);

	assert!(matches!(
		lookup.lookup("dats"),
		Err(LookupError::Corpus(CorpusError::Parser { line: 1, .. }))
	));

	Ok(())
}
