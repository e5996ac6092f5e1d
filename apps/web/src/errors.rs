use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render::{page, shell};

/// Why a Data Provider could not hand a résumé to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Résumé data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Résumé schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The navigation that asked for the résumé was abandoned before it resolved.
    #[error("Navigation superseded before the résumé resolved")]
    StaleNavigation,
}

impl ProviderError {
    /// Text shown on the fallback page. Never includes upstream detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::DataUnavailable(_) => {
                "There is no résumé to show right now. Please try again later."
            }
            ProviderError::SchemaMismatch(_) => {
                "The résumé could not be displayed because its data is malformed."
            }
            ProviderError::StaleNavigation => "This page was replaced by a newer navigation.",
        }
    }
}

/// Route-boundary error.
/// Implements `IntoResponse` so page handlers can return `Result<T, AppError>`
/// and always end in a rendered fallback page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Provider(ProviderError::StaleNavigation) => {
                tracing::debug!("Dropping stale résumé resolution");
                StatusCode::NO_CONTENT.into_response()
            }
            AppError::Provider(err) => {
                let status = match &err {
                    ProviderError::SchemaMismatch(detail) => {
                        tracing::error!("Résumé schema mismatch: {detail}");
                        StatusCode::BAD_GATEWAY
                    }
                    _ => {
                        tracing::warn!("{err}");
                        StatusCode::NOT_FOUND
                    }
                };
                let body = shell::document("Résumé unavailable", None, page::error_page(&err));
                (status, Html(body)).into_response()
            }
            AppError::NotFound(path) => {
                tracing::debug!("No route for {path}");
                let body = shell::document(
                    "Page not found",
                    None,
                    page::fallback_state("Page not found", "The page you asked for does not exist."),
                );
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unavailable = AppError::from(ProviderError::DataUnavailable("gone".into()));
        assert_eq!(unavailable.into_response().status(), StatusCode::NOT_FOUND);

        let mismatch = AppError::from(ProviderError::SchemaMismatch("bad".into()));
        assert_eq!(mismatch.into_response().status(), StatusCode::BAD_GATEWAY);

        let stale = AppError::from(ProviderError::StaleNavigation);
        assert_eq!(stale.into_response().status(), StatusCode::NO_CONTENT);

        let missing = AppError::NotFound("/nope".into());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = ProviderError::SchemaMismatch("missing field `id`".into());
        assert!(!err.user_message().contains("missing field"));
    }
}
