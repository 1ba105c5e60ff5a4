//! Wordsmith CLI
//!
//! Historic~ test words: `speling`, `definately`

use clap::Parser;
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};
use wordsmith::{
	format::DEFAULT_WIDTH, CorpusFormat, CorpusSource, Definitions, FreeDictionary, Lookup,
};

#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// The word to lookup in the dictionary
	word: Option<String>,

	/// Read words from stdin until EOF
	#[arg(long, short)]
	interactive: bool,

	/// Corpus the spelling corrector is trained on
	#[arg(long, env = "WORDSMITH_CORPUS", default_value = "big.txt")]
	corpus: PathBuf,

	/// Layout of the corpus file
	#[arg(long, value_enum, default_value_t = Format::Text)]
	corpus_format: Format,

	/// Dictionary service endpoint, words are appended as a path segment
	#[arg(long, env = "WORDSMITH_API_URL")]
	api_url: Option<String>,

	/// Column definitions are wrapped at
	#[arg(long, default_value_t = DEFAULT_WIDTH)]
	width: usize,
}

/// Command line spelling of [`CorpusFormat`]
#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
	/// Natural-language text
	Text,
	/// `word count` lines
	Counts,
}

impl From<Format> for CorpusFormat {
	fn from(format: Format) -> Self {
		match format {
			Format::Text => Self::Text,
			Format::Counts => Self::Counts,
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let dictionary = match &args.api_url {
		Some(url) => FreeDictionary::with_url(url)?,
		None => FreeDictionary::new()?,
	};
	let corpus = CorpusSource::new(args.corpus, args.corpus_format.into());
	let lookup = Lookup::new(dictionary, corpus).with_width(args.width);

	if let Some(word) = args.word {
		println!("{}", lookup.lookup(&normalize(&word))?);
		return Ok(());
	}

	if args.interactive {
		loop {
			print!("lookup word(s) ❯ ");
			stdout().flush()?;

			let mut input = String::new();
			if let 0 = stdin().read_line(&mut input)? {
				return Ok(());
			};

			input.split_whitespace().for_each(|word| {
				lookup_and_print(&lookup, &normalize(word));
			});
		}
	}

	Err("no action provided".into())
}

/// Words are matched in lowercase, without surrounding blanks
fn normalize(word: &str) -> String {
	word.trim().to_lowercase()
}

fn lookup_and_print<D: Definitions>(lookup: &Lookup<D>, word: &str) {
	match lookup.lookup(word) {
		Ok(output) => println!("{output}"),
		Err(err) => log::error!("Could not lookup `{word}`: {err}"),
	}
}
