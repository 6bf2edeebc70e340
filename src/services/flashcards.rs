use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use super::text::split_sentences;

pub const DEFAULT_CARD_COUNT: usize = 5;
/// Largest `num_cards` a request may ask for.
pub const MAX_CARD_COUNT: usize = 100;
pub const BLANK: &str = "____";

const MIN_SENTENCE_CHARS: usize = 20;
const MIN_SENTENCE_WORDS: usize = 5;
const MIN_KEY_WORD_CHARS: usize = 4;

const TOPIC_TEMPLATES: [&str; 5] = [
    "What is the definition of {topic}?",
    "What are the key concepts in {topic}?",
    "How does {topic} work?",
    "What are the applications of {topic}?",
    "What should you remember about {topic}?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Cloze cards built from `content`: each sentence longer than twenty
/// characters and five words gets one of its longer words blanked out.
/// Sentences with no word over four characters are skipped.
pub fn cards_from_content<R: Rng + ?Sized>(
    rng: &mut R,
    content: &str,
    num_cards: usize,
) -> Vec<Flashcard> {
    split_sentences(content)
        .into_iter()
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .take(num_cards)
        .filter_map(|sentence| blank_out_word(rng, sentence))
        .collect()
}

fn blank_out_word<R: Rng + ?Sized>(rng: &mut R, sentence: &str) -> Option<Flashcard> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= MIN_SENTENCE_WORDS {
        return None;
    }

    let candidates: Vec<&str> = words
        .into_iter()
        .filter(|word| word.chars().count() > MIN_KEY_WORD_CHARS)
        .collect();
    let key_word = candidates.choose(rng)?;

    Some(Flashcard {
        question: sentence.replace(key_word, BLANK),
        answer: (*key_word).to_string(),
    })
}

/// Exactly `num_cards` generic cards, cycling through the topic templates.
pub fn cards_for_topic(topic: &str, num_cards: usize) -> Vec<Flashcard> {
    (0..num_cards)
        .map(|i| Flashcard {
            question: TOPIC_TEMPLATES[i % TOPIC_TEMPLATES.len()].replace("{topic}", topic),
            answer: format!("Key concept {} related to {topic}", i + 1),
        })
        .collect()
}
