#![allow(dead_code)]

/// Named endpoint templates on the backend API, relative to the configured
/// base URL (which already ends in `/api`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Refresh,
    Users,
    User(String),
    Resumes,
    Resume(String),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/v1/auth/login".to_string(),
            Endpoint::Refresh => "/v1/auth/refresh".to_string(),
            Endpoint::Users => "/v1/users".to_string(),
            Endpoint::User(id) => format!("/v1/users/{id}"),
            Endpoint::Resumes => "/v1/resumes".to_string(),
            Endpoint::Resume(id) => format!("/v1/resumes/{id}"),
        }
    }
}
