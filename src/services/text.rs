use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));

/// Splits on runs of `.`, `!` and `?`, trimming each fragment and dropping the
/// empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collapses_punctuation_runs() {
        let sentences = split_sentences("Wait... what?! Yes.  ");
        assert_eq!(sentences, vec!["Wait", "what", "Yes"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" ... ").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\tthree  "), 3);
    }
}
