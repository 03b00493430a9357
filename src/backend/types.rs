use crate::error::BackendError;
use serde::{Deserialize, Serialize};

/// Backend job state as reported by the status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    #[default]
    Unset,
    Idle,
    Processing,
    Other(String),
}

impl From<String> for JobState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Self::Unset,
            "idle" => Self::Idle,
            "processing" => Self::Processing,
            _ => Self::Other(value),
        }
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Unset => String::new(),
            JobState::Idle => "idle".to_string(),
            JobState::Processing => "processing".to_string(),
            JobState::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    #[serde(default)]
    pub status: JobState,
    #[serde(default)]
    pub processed_files: Vec<String>,
}

impl ProcessingStatus {
    pub fn is_idle(&self) -> bool {
        self.status == JobState::Idle
    }
}

/// Completed network work handed back to the UI thread.
#[derive(Debug)]
pub enum BackendEvent {
    Submitted(Result<serde_json::Value, BackendError>),
    Polled(Result<ProcessingStatus, BackendError>),
}
