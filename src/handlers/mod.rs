pub mod quiz;

use axum::{routing::get, Router};

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZ_URL, get(quiz::quiz))
}
