//! wordsmith
//!
//! Looks up word definitions and, when a word is unknown to the dictionary
//! service, retries with the most probable spelling correction.

pub mod corpus;
pub mod definition;
pub mod edits;
pub mod format;
pub mod lookup;
mod speller;
mod suggest;

pub use corpus::{CorpusError, CorpusFormat, CorpusSource, WordFrequencyTable};
pub use definition::{DefineError, Definitions, Entry, FreeDictionary};
pub use lookup::{Lookup, LookupError};
pub use speller::SpellChecker;
