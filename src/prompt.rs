//! Prompt interpreter
//!
//! Extracts destination, date phrase, and nightly budget from a free-text
//! chat message. Each extractor is a small pure function over a lower-cased
//! copy of the message, so every field stays independently testable. No
//! regular expressions; plain token scanning is enough for the accepted
//! grammar.

use crate::dates::month_number;
use crate::{Result, StayfinderError};

/// The three fields extracted from one chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// Lower-cased city name
    pub destination: String,
    /// Canonical date phrase, e.g. "March 28-30"
    pub date_phrase: String,
    /// Requested nightly budget in INR (default applied when absent)
    pub nightly_budget: u32,
}

/// Interpret a chat message into search fields
///
/// Checks are sequential and short-circuit: a missing destination is
/// reported before a missing date phrase is even looked for. A missing
/// budget is not an error; `default_budget` fills in.
pub fn interpret(message: &str, default_budget: u32) -> Result<Interpretation> {
    let lowered = message.to_lowercase();

    let destination =
        extract_destination(&lowered).ok_or(StayfinderError::MissingDestination)?;
    let date_phrase = extract_date_phrase(&lowered).ok_or(StayfinderError::MissingDates)?;
    let nightly_budget = extract_budget(&lowered).unwrap_or(default_budget);

    Ok(Interpretation {
        destination,
        date_phrase,
        nightly_budget,
    })
}

/// Extract the destination: the words following "in", stopping at "for",
/// "under", a non-alphabetic token, or the end of the message.
#[must_use]
pub fn extract_destination(message: &str) -> Option<String> {
    let words: Vec<&str> = message.split_whitespace().collect();

    for (index, word) in words.iter().enumerate() {
        if *word != "in" {
            continue;
        }

        let mut parts = Vec::new();
        for candidate in &words[index + 1..] {
            let is_stop_word = *candidate == "for" || *candidate == "under";
            if is_stop_word || !candidate.chars().all(char::is_alphabetic) {
                break;
            }
            parts.push(*candidate);
        }

        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }

    None
}

/// Extract a date phrase: a month name followed by `day - day`, tolerant of
/// whitespace around the hyphen. Returns the canonical `"Month d1-d2"` form.
#[must_use]
pub fn extract_date_phrase(message: &str) -> Option<String> {
    let words: Vec<&str> = message.split_whitespace().collect();

    for (index, word) in words.iter().enumerate() {
        if month_number(word).is_none() {
            continue;
        }

        let rest = words[index + 1..].join(" ");
        if let Some((day_in, day_out)) = parse_day_pair(&rest) {
            return Some(format!("{} {day_in}-{day_out}", capitalize(word)));
        }
    }

    None
}

/// Extract the budget: "under", optionally followed by a currency glyph and
/// a digit run. `None` when the message names no budget.
#[must_use]
pub fn extract_budget(message: &str) -> Option<u32> {
    let mut rest = message;

    while let Some(position) = rest.find("under") {
        let after = rest[position + "under".len()..].trim_start();
        let after = after.strip_prefix('₹').unwrap_or(after);

        let digits: String = after.chars().take_while(char::is_ascii_digit).collect();
        if let Ok(budget) = digits.parse() {
            return Some(budget);
        }

        rest = &rest[position + "under".len()..];
    }

    None
}

/// Parse `"d1 - d2"` with optional whitespace around the hyphen; day
/// numbers are 1-2 digits, trailing text is ignored.
fn parse_day_pair(input: &str) -> Option<(u32, u32)> {
    let (day_in, rest) = take_day(input.trim_start())?;
    let rest = rest.trim_start().strip_prefix('-')?;
    let (day_out, _) = take_day(rest.trim_start())?;
    Some((day_in, day_out))
}

/// Take a leading 1-2 digit day number, returning it and the remainder
fn take_day(input: &str) -> Option<(u32, &str)> {
    let digits: String = input
        .chars()
        .take_while(char::is_ascii_digit)
        .take(2)
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some((digits.parse().ok()?, &input[digits.len()..]))
}

/// Upper-case the first character, used when echoing fields back to the user
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
