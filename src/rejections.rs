use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::QuizError, views};

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Input(String),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::NotFound { .. } => {
                tracing::error!("{err}");
                AppError::NotFound(err.to_string())
            }
            QuizError::InvalidToken { .. } | QuizError::TooManyAnswers { .. } => {
                tracing::warn!("rejecting request: {err}");
                AppError::Input(err.to_string())
            }
            QuizError::ExhaustedBank => {
                tracing::error!("quiz page requested for a complete quiz: {err}");
                AppError::Internal("question selection failed")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match &self {
            AppError::NotFound(detail) => ("NOT_FOUND", detail.as_str()),
            AppError::Input(detail) => ("INPUT_ERROR", detail.as_str()),
            AppError::Internal(detail) => ("INTERNAL_SERVER_ERROR", *detail),
        };
        let page = views::error_page(message, detail);

        (status, page).into_response()
    }
}

pub trait ResultExt<T> {
    /// Logs the error and turns it into an internal server error.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
