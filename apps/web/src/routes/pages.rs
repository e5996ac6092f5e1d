//! Axum route handlers for the page routes.

use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::render::shell::{self, NavTarget};
use crate::render::{page, pages};
use crate::routes::loader::load_resume;
use crate::routes::session::NavSession;
use crate::state::AppState;

const STYLESHEET: &str = include_str!("../../assets/app.css");

/// GET /
pub async fn handle_landing(State(state): State<AppState>, session: NavSession) -> Response {
    state.navigation.navigate(session.id);
    let body = shell::document("Home", Some(NavTarget::Home), pages::landing());
    session.attach(Html(body).into_response())
}

/// GET /login
///
/// Form stub only. Nothing is posted anywhere.
pub async fn handle_login(State(state): State<AppState>, session: NavSession) -> Response {
    state.navigation.navigate(session.id);
    let body = shell::document("Log in", Some(NavTarget::Login), pages::login());
    session.attach(Html(body).into_response())
}

/// GET /resume
///
/// Resolves the résumé through the configured provider before rendering.
/// Provider failures render the fallback page. A resolution overtaken by a
/// newer navigation from the same session is dropped (204).
pub async fn handle_resume(State(state): State<AppState>, session: NavSession) -> Response {
    let ticket = state.navigation.navigate(session.id);

    let response = match load_resume(&state.navigation, ticket, state.provider.as_ref()).await {
        Ok(resume) => Html(shell::document(
            &resume.title,
            Some(NavTarget::Resume),
            page::resume_page(&resume),
        ))
        .into_response(),
        Err(err) => AppError::from(err).into_response(),
    };

    session.attach(response)
}

/// GET /static/app.css
pub async fn handle_stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

pub async fn handle_not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(uri.path().to_string()))
}
