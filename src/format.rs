//! Plain text rendering of dictionary entries

use crate::definition::Entry;

/// Width output is wrapped at when nothing else is configured
pub const DEFAULT_WIDTH: usize = 80;

/// Indent of a definition's continuation lines, aligns after `1. `
const HANGING_INDENT: &str = "   ";
/// Indent of every synonym line
const SYNONYM_INDENT: &str = "      ";

/// Render every definition of `entries`, numbered per entry and wrapped at `width`
///
/// Definitions without text are skipped and do not consume a number.
#[must_use]
pub fn format_entries(entries: &[Entry], width: usize) -> String {
	let mut output = String::new();

	for entry in entries {
		output.push_str("\n\n");
		output.push_str(&"=".repeat(width));
		output.push('\n');
		output.push_str(&title_case(&entry.word));

		let mut number = 1;

		for meaning in &entry.meanings {
			let part_of_speech = meaning
				.part_of_speech
				.as_deref()
				.map(|pos| format!("({}): ", title_case(pos)))
				.unwrap_or_default();

			for definition in &meaning.definitions {
				let Some(text) = &definition.definition else {
					continue;
				};

				output.push_str("\n\n");
				output.push_str(&fill(
					&format!("{number}. {part_of_speech}{text}"),
					width,
					"",
					HANGING_INDENT,
				));

				if !definition.synonyms.is_empty() {
					output.push_str(&format!("\n\n{SYNONYM_INDENT}Synonyms:\n"));
					output.push_str(&fill(
						&definition.synonyms.join(", "),
						width,
						SYNONYM_INDENT,
						SYNONYM_INDENT,
					));
				}

				number += 1;
			}
		}
	}

	output
}

/// Uppercase the first letter of each word and lowercase the rest
///
/// A word starts after any character that is neither a letter nor an apostrophe,
/// so `part-of-speech` becomes `Part-Of-Speech` but `don't` stays `Don't`.
#[must_use]
pub fn title_case(text: &str) -> String {
	let mut output = String::with_capacity(text.len());
	let mut previous: Option<char> = None;

	for c in text.chars() {
		let starts_word = previous.map_or(true, |p| !p.is_alphabetic() && p != '\'');
		if starts_word {
			output.extend(c.to_uppercase());
		} else {
			output.extend(c.to_lowercase());
		}
		previous = Some(c);
	}

	output
}

/// Greedily wrap `text` into lines of at most `width` characters
///
/// Every whitespace character becomes a space. Lines break between words or
/// after a hyphen joining two letter runs (`well-` `known`), and whitespace at
/// a break is dropped. A word longer than a whole line fills the rest of the
/// current line and carries on the next, split after its last fitting hyphen
/// when there is one.
#[must_use]
pub fn fill(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> String {
	let text: String = text
		.chars()
		.map(|c| if c.is_whitespace() { ' ' } else { c })
		.collect();

	// popped from the back
	let mut chunks = chunks(&text);
	chunks.reverse();

	let mut lines: Vec<String> = Vec::new();

	while !chunks.is_empty() {
		let indent = if lines.is_empty() {
			initial_indent
		} else {
			subsequent_indent
		};
		let room = width.saturating_sub(indent.chars().count());

		if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
			chunks.pop();
		}

		let mut line: Vec<Vec<char>> = Vec::new();
		let mut line_len = 0;

		while let Some(chunk) = chunks.pop() {
			if line_len + chunk.len() <= room {
				line_len += chunk.len();
				line.push(chunk);
			} else {
				chunks.push(chunk);
				break;
			}
		}

		if let Some(chunk) = chunks.last_mut() {
			if chunk.len() > room {
				line.push(split_long_word(chunk, room, line_len));
			}
		}

		if line.last().is_some_and(|c| is_blank(c)) {
			line.pop();
		}

		if !line.is_empty() {
			lines.push(indent.chars().chain(line.into_iter().flatten()).collect());
		}
	}

	lines.join("\n")
}

/// Cut the head of `chunk` that fits in what is left of a `room` wide line
fn split_long_word(chunk: &mut Vec<char>, room: usize, line_len: usize) -> Vec<char> {
	let space_left = if room == 0 { 1 } else { room - line_len };

	let mut end = space_left;
	if let Some(hyphen) = chunk[..space_left].iter().rposition(|&c| c == '-') {
		if hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-') {
			end = hyphen + 1;
		}
	}

	let rest = chunk.split_off(end);
	std::mem::replace(chunk, rest)
}

/// Split `text` into runs of spaces and words, words are cut after inner hyphens
fn chunks(text: &str) -> Vec<Vec<char>> {
	let chars: Vec<char> = text.chars().collect();
	let letter = |i: usize| chars.get(i).is_some_and(|c| c.is_alphabetic());
	let hyphen_at = |i: usize| chars.get(i) == Some(&'-');

	// `ab-c?d` or `a-b-c?d`, a lone letter before the hyphen does not count
	let breaks_after = |i: usize| {
		hyphen_at(i)
			&& i >= 2
			&& letter(i - 1)
			&& (letter(i - 2) || (i >= 3 && hyphen_at(i - 2) && letter(i - 3)))
			&& letter(i + 1)
			&& (letter(i + 2) || (hyphen_at(i + 2) && letter(i + 3)))
	};

	let mut chunks = Vec::new();
	let mut current: Vec<char> = Vec::new();

	for (i, &c) in chars.iter().enumerate() {
		if !current.is_empty() && (c == ' ') != is_blank(&current) {
			chunks.push(std::mem::take(&mut current));
		}
		current.push(c);

		if breaks_after(i) {
			chunks.push(std::mem::take(&mut current));
		}
	}

	if !current.is_empty() {
		chunks.push(current);
	}

	chunks
}

fn is_blank(chunk: &[char]) -> bool {
	chunk.iter().all(|&c| c == ' ')
}
