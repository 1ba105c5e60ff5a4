//! Fetching word definitions from a dictionary service

use reqwest::{blocking::Client, StatusCode, Url};
use serde::Deserialize;

/// Default endpoint of the free dictionary API, English entries
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Ways fetching a definition could go wrong
#[derive(Debug, thiserror::Error)]
pub enum DefineError {
	/// Service URL is not usable as a base for word paths
	#[error("Invalid dictionary service URL: {0}")]
	InvalidUrl(String),

	/// Request could not be completed
	#[error(transparent)]
	Http(#[from] reqwest::Error),

	/// Service answered with something that is not a list of entries
	#[error("Could not decode dictionary response: {0}")]
	Json(#[from] serde_json::Error),
}

/// One headword returned by the dictionary service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
	/// The word as spelled by the service
	pub word: String,
	/// Meanings grouped by part of speech
	#[serde(default)]
	pub meanings: Vec<Meaning>,
}

/// Definitions sharing a part of speech
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
	/// e.g. `noun`, `verb`
	#[serde(default)]
	pub part_of_speech: Option<String>,
	/// In the order the service lists them
	#[serde(default)]
	pub definitions: Vec<Definition>,
}

/// A single sense of a word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
	/// Some senses only carry synonyms
	#[serde(default)]
	pub definition: Option<String>,
	/// Empty when the service lists none
	#[serde(default)]
	pub synonyms: Vec<String>,
}

/// Source of dictionary entries
pub trait Definitions {
	/// Entries for `word`, `None` when the source knows nothing about it
	///
	/// # Errors
	///
	/// Check [`DefineError`] to see all the ways this function breaks
	fn define(&self, word: &str) -> Result<Option<Vec<Entry>>, DefineError>;
}

impl<D: Definitions + ?Sized> Definitions for &D {
	fn define(&self, word: &str) -> Result<Option<Vec<Entry>>, DefineError> {
		(**self).define(word)
	}
}

/// Client for the free dictionary API (`dictionaryapi.dev`)
#[derive(Debug, Clone)]
pub struct FreeDictionary {
	client: Client,
	base: Url,
}

impl FreeDictionary {
	/// Client targeting [`DEFAULT_API_URL`]
	///
	/// # Errors
	///
	/// Will error if the HTTP client cannot be initialised.
	pub fn new() -> Result<Self, DefineError> {
		Self::with_url(DEFAULT_API_URL)
	}

	/// Client targeting another deployment of the same API
	///
	/// # Errors
	///
	/// Will error if `url` cannot be used as a base for word lookups.
	pub fn with_url(url: &str) -> Result<Self, DefineError> {
		let base = Url::parse(url).map_err(|e| DefineError::InvalidUrl(format!("{url}: {e}")))?;
		if base.cannot_be_a_base() {
			return Err(DefineError::InvalidUrl(url.to_owned()));
		}

		Ok(Self {
			client: Client::builder().build()?,
			base,
		})
	}

	/// Request URL for `word`, the word is percent-encoded as the last path segment
	///
	/// # Errors
	///
	/// Will error if the base URL cannot take path segments.
	pub fn url_for(&self, word: &str) -> Result<Url, DefineError> {
		let mut url = self.base.clone();
		url.path_segments_mut()
			.map_err(|()| DefineError::InvalidUrl(self.base.to_string()))?
			.pop_if_empty()
			.push(word);
		Ok(url)
	}
}

impl Definitions for FreeDictionary {
	fn define(&self, word: &str) -> Result<Option<Vec<Entry>>, DefineError> {
		let url = self.url_for(word)?;
		log::debug!("Requesting `{url}`");

		let response = self.client.get(url).send()?;
		let status = response.status();

		// every error status means no usable definition, 404 is the common case
		if !status.is_success() {
			if status != StatusCode::NOT_FOUND {
				log::warn!("Dictionary service answered {status} for `{word}`");
			}
			log::debug!("No definition for `{word}`");
			return Ok(None);
		}

		decode_entries(&response.text()?).map(Some)
	}
}

/// Decode a dictionary service response body
///
/// # Errors
///
/// Will error if `body` is not a JSON list of entries.
pub fn decode_entries(body: &str) -> Result<Vec<Entry>, DefineError> {
	Ok(serde_json::from_str(body)?)
}
