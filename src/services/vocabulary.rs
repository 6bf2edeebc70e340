use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MAX_ENTRIES: usize = 20;

const GENERIC_DEFINITION: &str =
    "A key term related to the subject. Review this concept and understand its meaning in context.";

static LONG_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{5,}\b").expect("word pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyLevel {
    Intermediate,
    Advanced,
    All,
}

/// Unknown difficulty names select every word.
impl FromStr for VocabularyLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::All,
        })
    }
}

impl VocabularyLevel {
    pub fn accepts(self, word: &str) -> bool {
        let len = word.len();
        match self {
            Self::Intermediate => (6..=10).contains(&len),
            Self::Advanced => len > 10,
            Self::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
}

/// Distinct ASCII words of five letters or more, longest first, capped at
/// twenty. Equal lengths keep the order of first appearance.
pub fn extract_vocabulary(text: &str, level: VocabularyLevel) -> Vec<VocabularyEntry> {
    let mut seen = HashSet::new();
    let mut words: Vec<&str> = LONG_WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| seen.insert(*word))
        .filter(|word| level.accepts(word))
        .collect();

    words.sort_by(|a, b| b.len().cmp(&a.len()));
    words.truncate(MAX_ENTRIES);

    words
        .into_iter()
        .map(|word| VocabularyEntry {
            word: capitalize(word),
            definition: GENERIC_DEFINITION.to_string(),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
