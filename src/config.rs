use std::path::PathBuf;

use color_eyre::{eyre::ensure, Result};

use crate::{models::QuestionId, names};

/// File names of the four assets inside a question directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFiles {
    pub prompt: String,
    pub hint: String,
    pub explanation: String,
    pub solution: String,
}

impl Default for QuestionFiles {
    fn default() -> Self {
        Self {
            prompt: names::PROMPT_FILENAME.to_owned(),
            hint: names::HINT_FILENAME.to_owned(),
            explanation: names::EXPLANATION_FILENAME.to_owned(),
            solution: names::SOLUTION_FILENAME.to_owned(),
        }
    }
}

/// Static quiz configuration shared by every request.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub questions_dir: PathBuf,
    pub files: QuestionFiles,
    bank: Vec<QuestionId>,
    quiz_len: usize,
}

impl QuizConfig {
    pub fn new(
        questions_dir: impl Into<PathBuf>,
        bank: impl IntoIterator<Item = QuestionId>,
        quiz_len: usize,
    ) -> Result<Self> {
        let mut bank: Vec<QuestionId> = bank.into_iter().collect();
        bank.sort_unstable();
        bank.dedup();

        ensure!(!bank.is_empty(), "the question bank is empty");
        ensure!(quiz_len > 0, "the quiz needs at least one question");
        ensure!(
            quiz_len <= bank.len(),
            "quiz length {quiz_len} exceeds the {} questions in the bank",
            bank.len()
        );

        Ok(Self {
            questions_dir: questions_dir.into(),
            files: QuestionFiles::default(),
            bank,
            quiz_len,
        })
    }

    pub fn with_files(mut self, files: QuestionFiles) -> Self {
        self.files = files;
        self
    }

    /// Sorted, deduplicated question ids.
    pub fn bank(&self) -> &[QuestionId] {
        &self.bank
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.bank.binary_search(&id).is_ok()
    }

    pub fn quiz_len(&self) -> usize {
        self.quiz_len
    }
}
