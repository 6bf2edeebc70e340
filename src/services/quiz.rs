use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_QUESTION_COUNT: usize = 5;
/// Largest `num_questions` a request may ask for.
pub const MAX_QUESTION_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: u8,
    pub explanation: String,
}

/// A bank entry; converted into an owned `QuizQuestion` when drawn.
#[derive(Debug)]
struct BankQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: u8,
    explanation: &'static str,
}

impl BankQuestion {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.map(str::to_string),
            correct_answer: self.correct_answer,
            explanation: self.explanation.to_string(),
        }
    }
}

static QUIZ_BANK: &[(&str, &[BankQuestion])] = &[
    (
        "python",
        &[
            BankQuestion {
                question: "What is the output of print(type([]))?",
                options: ["<class 'list'>", "<class 'dict'>", "<class 'tuple'>", "<class 'set'>"],
                correct_answer: 0,
                explanation: "[] represents an empty list in Python, so type([]) returns <class 'list'>",
            },
            BankQuestion {
                question: "Which keyword is used to create a function in Python?",
                options: ["function", "def", "func", "define"],
                correct_answer: 1,
                explanation: "The 'def' keyword is used to define a function in Python",
            },
            BankQuestion {
                question: "What does the len() function do?",
                options: ["Returns length of object", "Deletes an object", "Creates a list", "Sorts items"],
                correct_answer: 0,
                explanation: "len() returns the number of items in an object like strings, lists, or tuples",
            },
        ],
    ),
    (
        "mathematics",
        &[
            BankQuestion {
                question: "What is the value of π (pi) approximately?",
                options: ["2.14", "3.14", "4.14", "5.14"],
                correct_answer: 1,
                explanation: "π (pi) is approximately 3.14159, commonly rounded to 3.14",
            },
            BankQuestion {
                question: "What is 15% of 200?",
                options: ["20", "25", "30", "35"],
                correct_answer: 2,
                explanation: "15% of 200 = (15/100) × 200 = 30",
            },
        ],
    ),
    (
        "science",
        &[
            BankQuestion {
                question: "What is the chemical symbol for water?",
                options: ["O2", "H2O", "CO2", "H2O2"],
                correct_answer: 1,
                explanation: "Water consists of 2 hydrogen atoms and 1 oxygen atom, hence H2O",
            },
            BankQuestion {
                question: "What is the speed of light?",
                options: ["300,000 km/s", "150,000 km/s", "450,000 km/s", "600,000 km/s"],
                correct_answer: 0,
                explanation: "Light travels at approximately 300,000 kilometers per second in a vacuum",
            },
        ],
    ),
];

const FILLER_TEMPLATES: [&str; 5] = [
    "What is the main concept of {topic}?",
    "Which of the following is true about {topic}?",
    "What is an important application of {topic}?",
    "What should you know about {topic}?",
    "Which statement best describes {topic}?",
];

/// Bank questions for every key that contains the topic or is contained by it,
/// compared case-insensitively.
fn matching_pool(topic: &str) -> Vec<&'static BankQuestion> {
    let topic_lower = topic.to_lowercase();
    QUIZ_BANK
        .iter()
        .filter(|(key, _)| topic_lower.contains(key) || key.contains(topic_lower.as_str()))
        .flat_map(|(_, questions)| questions.iter())
        .collect()
}

pub fn generate_quiz<R: Rng + ?Sized>(
    rng: &mut R,
    topic: &str,
    num_questions: usize,
) -> Vec<QuizQuestion> {
    let mut pool = matching_pool(topic);
    if pool.is_empty() {
        return generate_filler_questions(rng, topic, num_questions);
    }

    pool.shuffle(rng);
    let mut questions: Vec<QuizQuestion> = pool
        .into_iter()
        .take(num_questions)
        .map(BankQuestion::to_question)
        .collect();

    let missing = num_questions - questions.len();
    if missing > 0 {
        tracing::debug!(topic, missing, "padding quiz with filler questions");
        questions.extend(generate_filler_questions(rng, topic, missing));
    }

    questions
}

/// Template questions for topics the bank does not cover. The correct answer
/// index is drawn at random, so these cannot be graded meaningfully.
pub fn generate_filler_questions<R: Rng + ?Sized>(
    rng: &mut R,
    topic: &str,
    count: usize,
) -> Vec<QuizQuestion> {
    (0..count)
        .map(|_| {
            let template = FILLER_TEMPLATES
                .choose(rng)
                .copied()
                .unwrap_or(FILLER_TEMPLATES[0]);
            QuizQuestion {
                question: template.replace("{topic}", topic),
                options: ["A", "B", "C", "D"].map(|letter| format!("Option {letter} related to {topic}")),
                correct_answer: rng.random_range(0..=3),
                explanation: format!(
                    "This is a general question about {topic}. The correct answer demonstrates understanding of the core concepts."
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bank_answers_index_options() {
        for (_, questions) in QUIZ_BANK {
            for q in questions.iter() {
                assert!((q.correct_answer as usize) < q.options.len());
            }
        }
    }

    #[test]
    fn test_topic_matching_both_directions() {
        assert_eq!(matching_pool("Python").len(), 3);
        assert_eq!(matching_pool("Advanced Python programming").len(), 3);
        assert_eq!(matching_pool("math").len(), 2);
        assert_eq!(matching_pool("history").len(), 0);
    }

    #[test]
    fn test_python_exact_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in [0, 1, 3, 5, 12] {
            let questions = generate_quiz(&mut rng, "python", n);
            assert_eq!(questions.len(), n);
            assert!(questions.iter().all(|q| q.correct_answer <= 3));
        }
    }

    #[test]
    fn test_bank_questions_are_distinct() {
        let mut rng = StdRng::seed_from_u64(2);
        let questions = generate_quiz(&mut rng, "python", 3);
        let mut texts: Vec<_> = questions.iter().map(|q| q.question.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 3);
        assert!(questions.iter().all(|q| !q.question.contains("main concept")));
    }

    #[test]
    fn test_padding_follows_bank_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let questions = generate_quiz(&mut rng, "science", 4);
        assert_eq!(questions.len(), 4);
        assert!(questions[2].options[0].starts_with("Option A related to science"));
        assert!(questions[3].options[3].starts_with("Option D related to science"));
    }

    #[test]
    fn test_unknown_topic_is_all_filler() {
        let mut rng = StdRng::seed_from_u64(4);
        let questions = generate_quiz(&mut rng, "Medieval History", 2);
        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert!(q.question.contains("Medieval History"));
            assert_eq!(q.options[1], "Option B related to Medieval History");
        }
    }
}
