//! Résumé aggregate, the read-only snapshot every page view renders from.
//!
//! The wire format is the backend's camelCase JSON. Optional attributes are
//! normalised on the way in: an empty or whitespace-only string becomes `None`,
//! so renderers only ever branch on `Some`/`None`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::ProviderError;

/// Display text for an end date the backend left open.
pub const ONGOING_LABEL: &str = "현재";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    #[serde(default, alias = "description", deserialize_with = "non_empty")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
    /// Carried through from the backend; no rendering depends on it.
    #[serde(default)]
    pub public: bool,
    /// Carried through from the backend; no rendering depends on it.
    #[serde(default, deserialize_with = "non_empty")]
    pub template: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub educations: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experiences: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub degree: Option<String>,
    pub start_date: String,
    #[serde(default = "ongoing", deserialize_with = "end_date")]
    pub end_date: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub activities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default = "ongoing", deserialize_with = "end_date")]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub start_date: String,
    #[serde(default = "ongoing", deserialize_with = "end_date")]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub url: Option<String>,
}

impl Resume {
    /// Builds a résumé from an untyped JSON document.
    ///
    /// `null` means the source had no record; anything that fails to deserialize
    /// or validate is a schema mismatch.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        if value.is_null() {
            return Err(ProviderError::DataUnavailable(
                "source returned no résumé record".to_string(),
            ));
        }

        let resume: Resume = serde_json::from_value(value)
            .map_err(|e| ProviderError::SchemaMismatch(e.to_string()))?;
        resume.validate()?;
        Ok(resume)
    }

    /// Checks the invariants serde cannot express: non-blank ids, unique within
    /// each owning collection.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.id.trim().is_empty() {
            return Err(ProviderError::SchemaMismatch(
                "resume id must not be empty".to_string(),
            ));
        }

        check_ids("educations", self.educations.iter().map(|e| e.id.as_str()))?;
        check_ids("experiences", self.experiences.iter().map(|e| e.id.as_str()))?;
        check_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }
}

fn check_ids<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ProviderError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(ProviderError::SchemaMismatch(format!(
                "{collection}[{index}] has an empty id"
            )));
        }
        if !seen.insert(id) {
            return Err(ProviderError::SchemaMismatch(format!(
                "{collection}[{index}] repeats id '{id}'"
            )));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Field adapters
// ────────────────────────────────────────────────────────────────────────────

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn end_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(deserializer)?.unwrap_or_else(ongoing))
}

fn ongoing() -> String {
    ONGOING_LABEL.to_string()
}
