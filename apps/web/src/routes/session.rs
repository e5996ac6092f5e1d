use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
    response::Response,
};
use uuid::Uuid;

pub const COOKIE_NAME: &str = "nav_session";

/// Identifies one browser across navigations, via the `nav_session` cookie.
/// A request without a valid cookie gets a fresh id, issued on the response.
#[derive(Debug, Clone, Copy)]
pub struct NavSession {
    pub id: Uuid,
    is_new: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for NavSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match session_from_headers(&parts.headers) {
            Some(id) => NavSession { id, is_new: false },
            None => NavSession {
                id: Uuid::new_v4(),
                is_new: true,
            },
        })
    }
}

impl NavSession {
    /// Adds `Set-Cookie` to `response` when this session was just created.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            let cookie = format!("{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}

fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
