mod error;
mod flash;
mod handlers;
mod templates;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use minijinja::Environment;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::catalog::Catalog;

pub use error::AppError;
pub use handlers::{AnswerForm, SelectSurveyForm};

/// Shared, read-only application state: the survey catalog and the compiled
/// template environment. Cheap to clone; handed to every handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Result<Self, minijinja::Error> {
        Ok(Self {
            catalog: Arc::new(catalog),
            templates: Arc::new(templates::environment()?),
        })
    }
}

pub fn create_router(catalog: Catalog) -> anyhow::Result<Router> {
    let state = AppState::new(catalog)?;

    // Sessions live server-side in memory and end with the browser session,
    // matching the single-visit scope of a survey attempt.
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Ok(Router::new()
        .route(
            "/",
            get(handlers::choose_survey).post(handlers::select_survey),
        )
        .route("/begin", post(handlers::begin_survey))
        .route("/questions/{question_id}", get(handlers::show_question))
        .route("/answer", post(handlers::record_answer))
        .route("/finish", get(handlers::finish_survey))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
