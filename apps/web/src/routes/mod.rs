pub mod health;
pub mod loader;
pub mod pages;
pub mod session;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_landing))
        .route("/resume", get(pages::handle_resume))
        .route("/login", get(pages::handle_login))
        .route("/static/app.css", get(pages::handle_stylesheet))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
