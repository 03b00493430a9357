use crate::backend::{PollHandle, ProcessingStatus};

#[derive(Default)]
pub struct DropZoneState {
    pub pending_files: Vec<String>,
    pub status: ProcessingStatus,
    pub dragging: bool,
    pub is_processing: bool,
    pub poller: Option<PollHandle>,
}

impl DropZoneState {
    pub fn append_files<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.pending_files.extend(names);
    }

    /// Clear pending names and the cached status. Polling is left alone.
    pub fn reset(&mut self) {
        self.pending_files.clear();
        self.status = ProcessingStatus::default();
    }

    pub fn shows_processed_list(&self) -> bool {
        self.is_processing || !self.status.processed_files.is_empty()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.is_finished())
    }

    pub fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
    }

    pub fn get_status_text(&self) -> String {
        if self.is_processing {
            format!(
                "Processing... {} file(s) done",
                self.status.processed_files.len()
            )
        } else if self.shows_processed_list() {
            format!(
                "Finished: {} file(s) processed",
                self.status.processed_files.len()
            )
        } else {
            format!("{} file(s) ready to submit", self.pending_files.len())
        }
    }
}
