//! Data provider: pluggable, trait-based source of the résumé aggregate.
//!
//! `StaticProvider` serves an in-memory document (the bundled mock by default).
//! `RemoteProvider` fetches by id from the backend API.
//!
//! `AppState` holds an `Arc<dyn ResumeProvider>`, chosen at startup from config.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::api_client::ApiClient;
use crate::config::{Config, ResumeSource};
use crate::errors::ProviderError;
use crate::models::resume::Resume;

pub mod remote;
pub mod static_source;

pub use remote::RemoteProvider;
pub use static_source::StaticProvider;

/// Implement this to add a data source without touching the route or the
/// renderers. Every variant yields the same `Resume` shape.
#[async_trait]
pub trait ResumeProvider: Send + Sync {
    async fn resolve(&self) -> Result<Resume, ProviderError>;

    /// Short label used in logs and the health report.
    fn name(&self) -> &'static str;
}

/// Resolves a résumé through `provider`, logging the outcome.
pub async fn fetch_resume(provider: &dyn ResumeProvider) -> Result<Resume, ProviderError> {
    match provider.resolve().await {
        Ok(resume) => {
            info!(
                "Resolved résumé {} via {} provider ({} experiences, {} projects, {} educations)",
                resume.id,
                provider.name(),
                resume.experiences.len(),
                resume.projects.len(),
                resume.educations.len()
            );
            Ok(resume)
        }
        Err(err) => {
            warn!("{} provider failed: {}", provider.name(), err);
            Err(err)
        }
    }
}

/// Builds the provider selected by `config.resume_source`.
pub async fn build_provider(config: &Config) -> Result<Arc<dyn ResumeProvider>> {
    let provider: Arc<dyn ResumeProvider> = match &config.resume_source {
        ResumeSource::Static { data_path: Some(path) } => {
            Arc::new(StaticProvider::from_file(path).await?)
        }
        ResumeSource::Static { data_path: None } => Arc::new(StaticProvider::mock()),
        ResumeSource::Remote { resume_id } => {
            let client = ApiClient::new(config.api_base_url.clone(), config.api_max_retries)?;
            Arc::new(RemoteProvider::new(client, resume_id.clone()))
        }
    };

    info!("Résumé provider: {}", provider.name());
    Ok(provider)
}
