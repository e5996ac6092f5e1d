use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::api_client::DEFAULT_BASE_URL;

/// Where the résumé page gets its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    /// In-memory document: the bundled mock, or a JSON file read at startup.
    Static { data_path: Option<PathBuf> },
    /// `GET /v1/resumes/{resume_id}` against the backend API.
    Remote { resume_id: String },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_source: ResumeSource,
    pub api_base_url: String,
    pub api_max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let resume_source = match lookup("RESUME_SOURCE")
            .unwrap_or_else(|| "static".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "static" => ResumeSource::Static {
                data_path: lookup("RESUME_DATA_PATH").map(PathBuf::from),
            },
            "remote" => ResumeSource::Remote {
                resume_id: lookup("RESUME_ID")
                    .filter(|id| !id.trim().is_empty())
                    .context("RESUME_ID must be set when RESUME_SOURCE=remote")?,
            },
            other => bail!("RESUME_SOURCE must be 'static' or 'remote', got '{other}'"),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            resume_source,
            api_base_url: lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_max_retries: lookup("API_MAX_RETRIES")
                .unwrap_or_else(|| "0".to_string())
                .parse::<u32>()
                .context("API_MAX_RETRIES must be a non-negative integer")?,
        })
    }
}
