use async_trait::async_trait;

use crate::api_client::ApiClient;
use crate::errors::ProviderError;
use crate::models::resume::Resume;
use crate::provider::ResumeProvider;

/// Fetches one résumé by id from the backend API.
#[derive(Clone)]
pub struct RemoteProvider {
    client: ApiClient,
    resume_id: String,
}

impl RemoteProvider {
    pub fn new(client: ApiClient, resume_id: String) -> Self {
        Self { client, resume_id }
    }
}

#[async_trait]
impl ResumeProvider for RemoteProvider {
    async fn resolve(&self) -> Result<Resume, ProviderError> {
        let value = self.client.get_resume(&self.resume_id).await?;
        Resume::from_value(value)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
