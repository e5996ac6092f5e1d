use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::models::resume::Resume;
use crate::provider::ResumeProvider;

/// Demo résumé bundled into the binary.
const MOCK_RESUME: &str = include_str!("../../data/resume.json");

/// Serves a résumé from an in-memory JSON document.
///
/// The document is validated on every `resolve`, so a broken file surfaces as
/// `SchemaMismatch` on the page instead of a startup crash.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    document: Option<String>,
}

impl StaticProvider {
    pub fn mock() -> Self {
        Self::from_json(MOCK_RESUME)
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            document: Some(json.into()),
        }
    }

    /// A provider with nothing to return.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { document: None }
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read résumé data from {}", path.display()))?;
        Ok(Self::from_json(json))
    }
}

#[async_trait]
impl ResumeProvider for StaticProvider {
    async fn resolve(&self) -> Result<Resume, ProviderError> {
        let document = self.document.as_deref().ok_or_else(|| {
            ProviderError::DataUnavailable("static provider holds no résumé".to_string())
        })?;

        if document.trim().is_empty() {
            return Err(ProviderError::DataUnavailable(
                "static résumé document is empty".to_string(),
            ));
        }

        let value: Value = serde_json::from_str(document)
            .map_err(|e| ProviderError::SchemaMismatch(format!("invalid JSON: {e}")))?;
        Resume::from_value(value)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::models::resume::ONGOING_LABEL;

    #[tokio::test]
    async fn test_mock_resolves() {
        let resume = StaticProvider::mock().resolve().await.unwrap();
        assert!(!resume.title.is_empty());
        assert!(!resume.experiences.is_empty());
        assert!(!resume.projects.is_empty());
        assert!(!resume.educations.is_empty());
        assert!(resume.experiences.iter().any(|e| e.end_date == ONGOING_LABEL));
    }

    #[tokio::test]
    async fn test_empty_provider_is_unavailable() {
        let err = StaticProvider::empty().resolve().await.unwrap_err();
        assert!(matches!(err, ProviderError::DataUnavailable(_)));

        let err = StaticProvider::from_json("  ").resolve().await.unwrap_err();
        assert!(matches!(err, ProviderError::DataUnavailable(_)));

        let err = StaticProvider::from_json("null").resolve().await.unwrap_err();
        assert!(matches!(err, ProviderError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_schema_mismatch() {
        let err = StaticProvider::from_json("{ not json").resolve().await.unwrap_err();
        assert!(matches!(err, ProviderError::SchemaMismatch(_)));

        let err = StaticProvider::from_json(r#"{"title": "no id"}"#)
            .resolve()
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id":"f1","title":"From disk","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z","skills":["Rust"]}}"#
        )
        .unwrap();

        let provider = StaticProvider::from_file(file.path()).await.unwrap();
        let resume = provider.resolve().await.unwrap();
        assert_eq!(resume.id, "f1");
        assert_eq!(resume.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_from_missing_file_fails() {
        assert!(StaticProvider::from_file(Path::new("/no/such/resume.json")).await.is_err());
    }
}
