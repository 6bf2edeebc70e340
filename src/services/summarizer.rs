use std::cmp::Ordering;

use super::text::{split_sentences, word_count};

const MIN_SUMMARY_SENTENCES: usize = 3;
const PREFERRED_WORDS_MIN: usize = 10;
const PREFERRED_WORDS_MAX: usize = 25;

/// Medium-length sentences score their word count; anything shorter or longer
/// scores half of it.
pub fn sentence_score(sentence: &str) -> f64 {
    let words = word_count(sentence);
    if (PREFERRED_WORDS_MIN..=PREFERRED_WORDS_MAX).contains(&words) {
        words as f64
    } else {
        words as f64 * 0.5
    }
}

pub fn summary_size(sentence_count: usize) -> usize {
    MIN_SUMMARY_SENTENCES.max(sentence_count / 3)
}

/// Extractive summary that keeps the highest scoring sentences in the order
/// they appear in `text`. Texts of three sentences or fewer come back as is.
pub fn summarize(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= MIN_SUMMARY_SENTENCES {
        return text.to_string();
    }

    let mut scored: Vec<(&str, f64)> = sentences
        .iter()
        .map(|sentence| (*sentence, sentence_score(sentence)))
        .collect();
    // stable: equal scores keep their original relative order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(summary_size(sentences.len()));

    // Membership is by text, so a repeated sentence is emitted at every position.
    let selected: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| scored.iter().any(|(chosen, _)| chosen == sentence))
        .collect();

    format!("{}.", selected.join(". "))
}
