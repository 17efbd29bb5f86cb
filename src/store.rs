use std::{fs, path::PathBuf, sync::Arc};

use crate::{
    config::{QuestionFiles, QuizConfig},
    error::{QuizError, Result},
    models::{Question, QuestionId},
};

/// Read-only access to the question directories on disk.
#[derive(Clone)]
pub struct QuizStore {
    root: Arc<PathBuf>,
    files: Arc<QuestionFiles>,
}

impl QuizStore {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            root: Arc::new(config.questions_dir.clone()),
            files: Arc::new(config.files.clone()),
        }
    }

    /// Loads all four assets of a question. Nothing is returned unless every
    /// asset could be read.
    pub fn load(&self, id: QuestionId) -> Result<Question> {
        let dir = self.root.join(id.to_string());
        let read = |asset: &'static str, name: &str| {
            fs::read_to_string(dir.join(name))
                .map_err(|source| QuizError::NotFound { id, asset, source })
        };

        let prompt = read("prompt", &self.files.prompt)?;
        let hint = read("hint", &self.files.hint)?;
        let explanation = read("explanation", &self.files.explanation)?;
        let solution = read("solution", &self.files.solution)?;

        Ok(Question {
            prompt,
            hint,
            explanation,
            solution: solution.trim_end_matches(['\r', '\n']).to_owned(),
        })
    }

    /// Loads every question of the bank once and checks its solution token.
    pub fn verify(&self, bank: &[QuestionId]) -> Result<()> {
        for &id in bank {
            let question = self.load(id)?;
            crate::codec::parse(&question.solution)?;
        }

        tracing::info!(
            "question bank has been verified ({} questions in {})",
            bank.len(),
            self.root.display()
        );
        Ok(())
    }
}
