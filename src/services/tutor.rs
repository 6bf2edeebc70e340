use serde::Serialize;

/// Which canned reply a question falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Definition,
    Explanation,
    Reasoning,
    Encouragement,
    General,
}

/// Checked in order; the first bucket with a matching keyword wins.
const KEYWORD_BUCKETS: [(QuestionKind, &[&str]); 4] = [
    (QuestionKind::Definition, &["what is", "define", "meaning"]),
    (QuestionKind::Explanation, &["how", "explain"]),
    (QuestionKind::Reasoning, &["why", "reason"]),
    (QuestionKind::Encouragement, &["help", "stuck", "difficult"]),
];

impl QuestionKind {
    pub fn classify(question: &str) -> Self {
        let lowered = question.to_lowercase();
        KEYWORD_BUCKETS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|(kind, _)| *kind)
            .unwrap_or(Self::General)
    }

    pub fn answer(self) -> &'static str {
        match self {
            Self::Definition => "That's a great question! Based on your query, let me explain: This concept is fundamental to understanding the subject. I recommend breaking it down into smaller parts and studying each component individually.",
            Self::Explanation => "Good question! Let me walk you through this step by step: First, understand the basic principle. Then, look at practical examples. Finally, practice applying it to different scenarios.",
            Self::Reasoning => "Excellent question! The reasoning behind this is important. This happens because of several factors working together. Understanding the 'why' helps you remember the 'what' more effectively.",
            Self::Encouragement => "Don't worry, everyone struggles sometimes! Here's my advice: Take a break, then come back fresh. Try explaining the concept to someone else or writing it down in your own words. Sometimes a different perspective helps!",
            Self::General => "That's an interesting question! To answer it properly, I'd need to consider the context and break it down. Start by reviewing the fundamental concepts, then build up to more complex ideas. Would you like me to explain any specific part?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_buckets() {
        assert_eq!(QuestionKind::classify("What is a monad?"), QuestionKind::Definition);
        assert_eq!(QuestionKind::classify("Please EXPLAIN recursion"), QuestionKind::Explanation);
        assert_eq!(QuestionKind::classify("Why does ice float"), QuestionKind::Reasoning);
        assert_eq!(QuestionKind::classify("I'm stuck on algebra"), QuestionKind::Encouragement);
        assert_eq!(QuestionKind::classify("Tell me about Rome"), QuestionKind::General);
    }

    #[test]
    fn test_priority_order() {
        // "what is" outranks "how" and "why"
        assert_eq!(QuestionKind::classify("What is how and why"), QuestionKind::Definition);
        // "show" contains "how"
        assert_eq!(QuestionKind::classify("show me, I need help"), QuestionKind::Explanation);
    }

    #[test]
    fn test_answer_ignores_topic() {
        let answer = |q: &str| QuestionKind::classify(q).answer();
        assert_eq!(answer("Define entropy"), answer("define photosynthesis"));
        assert!(answer("anything").starts_with("That's an interesting question!"));
    }
}
