use crate::backend::types::ProcessingStatus;
use crate::error::BackendError;

pub const UPLOAD_PATH: &str = "/upload_gzfiles/";
pub const STATUS_PATH: &str = "/get_file_processing_status/";

/// Thin JSON client for the processing backend.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the names as a JSON array. The response body is returned uninterpreted.
    pub async fn upload_file_names(
        &self,
        names: &[String],
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}{}", self.base_url, UPLOAD_PATH);
        let response = self.http.post(&url).json(names).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        Ok(response.json().await?)
    }

    pub async fn fetch_status(&self) -> Result<ProcessingStatus, BackendError> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        Ok(response.json().await?)
    }
}
