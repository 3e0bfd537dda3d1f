pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/survey/questions", get(handlers::handle_questions))
        .route("/api/survey/submit", post(handlers::handle_submit))
        .route("/api/survey/icon/:filename", get(handlers::handle_icon))
        .route(
            "/api/survey/school-icon/:filename",
            get(handlers::handle_school_icon),
        )
        .with_state(state)
}
