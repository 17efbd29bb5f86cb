//! Answer tokens and the answered set carried in the query string.
//!
//! A token is `"<choice>"` or `"<choice>:<payload>"`, where the payload is the
//! predicted output typed next to the "outputs" choice.

use std::collections::BTreeMap;

use crate::{
    config::QuizConfig,
    error::{QuizError, Result},
    models::{Answer, AnswerChoice, QuestionId},
};

/// Answers given so far, keyed by question.
pub type AnsweredSet = BTreeMap<QuestionId, String>;

pub fn encode(choice: AnswerChoice, payload: Option<&str>) -> String {
    match payload {
        Some(payload) => format!("{}:{payload}", choice.index()),
        None => choice.index().to_string(),
    }
}

pub fn parse(token: &str) -> Result<Answer> {
    let (index, payload) = match token.split_once(':') {
        Some((index, payload)) => (index, Some(payload.to_owned())),
        None => (token, None),
    };

    let choice = index
        .parse::<u8>()
        .ok()
        .and_then(AnswerChoice::from_index)
        .ok_or_else(|| QuizError::InvalidToken {
            token: token.to_owned(),
        })?;

    Ok(Answer::new(choice, payload))
}

/// Builds the answered set from raw query pairs.
///
/// Keys that are not question ids from the configured bank, written in their
/// canonical form (`"1"`, not `"01"` or `"+1"`), are dropped. A repeated key
/// keeps its last value.
pub fn decode_params<'a, I>(config: &QuizConfig, params: I) -> AnsweredSet
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut answered = AnsweredSet::new();

    for (key, value) in params {
        match key.parse::<QuestionId>() {
            Ok(id) if config.contains(id) && key == id.to_string() => {
                answered.insert(id, value.to_owned());
            }
            _ => tracing::debug!("ignoring query parameter {key:?}"),
        }
    }

    answered
}
