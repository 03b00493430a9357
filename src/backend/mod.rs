mod client;
mod poller;
mod types;

pub use client::{BackendClient, STATUS_PATH, UPLOAD_PATH};
pub use poller::{PollHandle, Poller};
pub use types::{BackendEvent, JobState, ProcessingStatus};
