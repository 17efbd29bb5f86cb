pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod markdown;
pub mod models;
pub mod names;
pub mod rejections;
pub mod selector;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::Router;

use crate::{config::QuizConfig, store::QuizStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<QuizConfig>,
    pub store: QuizStore,
}

impl AppState {
    pub fn new(config: QuizConfig) -> Self {
        let store = QuizStore::new(&config);
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .nest(names::STATIC_URL, statics::routes())
        .with_state(state)
}
