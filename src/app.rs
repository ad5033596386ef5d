use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/moods", post(handlers::add_mood))
        .route("/api/moods/recent", get(handlers::get_recent))
        .with_state(state)
}
