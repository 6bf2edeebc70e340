pub mod flashcards;
pub mod quiz;
pub mod study_plan;
pub mod summarizer;
pub mod text;
pub mod tutor;
pub mod vocabulary;
