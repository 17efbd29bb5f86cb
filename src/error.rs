use std::io;

use thiserror::Error;

use crate::models::QuestionId;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question {id}: could not read {asset}")]
    NotFound {
        id: QuestionId,
        asset: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("invalid answer token {token:?}")]
    InvalidToken { token: String },

    #[error("every question in the bank has already been answered")]
    ExhaustedBank,

    #[error("{answered} answers given but the quiz only has {quiz_len} questions")]
    TooManyAnswers { answered: usize, quiz_len: usize },
}

pub type Result<T, E = QuizError> = std::result::Result<T, E>;
