use axum::extract::{Query, State};
use maud::Markup;

use crate::{
    codec::{self, AnsweredSet},
    config::QuizConfig,
    error::{QuizError, Result},
    markdown::render_markdown,
    rejections::AppError,
    selector::{self, RandomSource, ThreadRandom},
    store::QuizStore,
    views::{
        self,
        quiz::{self as quiz_views, QuizData},
        results::{self as results_views, ResultRow, ResultsData},
    },
    AppState,
};

/// Everything needed to render either mode, before it becomes markup.
pub enum Page {
    Quiz(QuizData),
    Results(ResultsData),
}

impl Page {
    pub fn render(&self) -> Markup {
        match self {
            Page::Quiz(data) => views::page("Quiz", quiz_views::quiz(data)),
            Page::Results(data) => views::page("Results", results_views::results(data)),
        }
    }
}

pub(crate) async fn quiz(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Markup, AppError> {
    let params = params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let page = build_page(&state.config, &state.store, params, &mut ThreadRandom)?;
    Ok(page.render())
}

/// Rebuilds the quiz state from the query and picks the mode: the quiz page
/// while answers are missing, the results page once all are in.
pub fn build_page<'a, I>(
    config: &QuizConfig,
    store: &QuizStore,
    params: I,
    rng: &mut impl RandomSource,
) -> Result<Page>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let answered = codec::decode_params(config, params);

    // Malformed answers fail the request in both modes.
    for token in answered.values() {
        codec::parse(token)?;
    }

    if answered.len() > config.quiz_len() {
        return Err(QuizError::TooManyAnswers {
            answered: answered.len(),
            quiz_len: config.quiz_len(),
        });
    }

    if answered.len() < config.quiz_len() {
        quiz_page(config, store, &answered, rng).map(Page::Quiz)
    } else {
        results_page(config, store, &answered).map(Page::Results)
    }
}

pub fn quiz_page(
    config: &QuizConfig,
    store: &QuizStore,
    answered: &AnsweredSet,
    rng: &mut impl RandomSource,
) -> Result<QuizData> {
    let remaining = config.quiz_len().saturating_sub(answered.len());
    let question_id = selector::pick_unanswered(config.bank(), answered, rng)?;
    let question = store.load(question_id)?;

    tracing::info!(question_id, remaining, "rendering quiz page");

    Ok(QuizData {
        question_id,
        question,
        remaining,
    })
}

pub fn results_page(
    config: &QuizConfig,
    store: &QuizStore,
    answered: &AnsweredSet,
) -> Result<ResultsData> {
    let mut rows = Vec::with_capacity(answered.len());
    let mut correct = 0;

    for (&question_id, token) in answered {
        let question = store.load(question_id)?;

        let given = codec::parse(token)?;
        let expected = codec::parse(&question.solution)?;
        let is_correct = given.matches(&expected);
        if is_correct {
            correct += 1;
        }

        rows.push(ResultRow {
            question_id,
            prompt: question.prompt,
            given: given.display_text(),
            expected: expected.display_text(),
            explanation: render_markdown(&question.explanation),
            is_correct,
        });
    }

    tracing::info!(correct, total = config.quiz_len(), "rendering results page");

    Ok(ResultsData {
        rows,
        correct,
        quiz_len: config.quiz_len(),
    })
}
