mod state;
mod ui;

use crate::backend::{BackendClient, BackendEvent, Poller};
use crate::config::ClientConfig;
use eframe::{egui, App};
pub use state::DropZoneState;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;
use tokio::runtime::Runtime;

const PROCESSING_REPAINT: Duration = Duration::from_millis(100);

pub struct DropZoneApp {
    state: DropZoneState,
    client: BackendClient,
    poll_interval: Duration,
    runtime: Runtime,
    event_sender: std_mpsc::Sender<BackendEvent>,
    event_receiver: std_mpsc::Receiver<BackendEvent>,
}

impl DropZoneApp {
    pub fn new(config: &ClientConfig) -> std::io::Result<Self> {
        tracing::info!(backend = %config.backend_url, "Initializing drop zone");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dropzone-net")
            .enable_all()
            .build()?;
        let (event_sender, event_receiver) = std_mpsc::channel();

        Ok(Self {
            state: DropZoneState::default(),
            client: BackendClient::new(config.backend_url.clone()),
            poll_interval: config.poll_interval,
            runtime,
            event_sender,
            event_receiver,
        })
    }

    pub fn state(&self) -> &DropZoneState {
        &self.state
    }

    pub fn handle_drag_over(&mut self) {
        self.state.dragging = true;
    }

    pub fn handle_drag_leave(&mut self) {
        self.state.dragging = false;
    }

    pub fn handle_drop<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.state.dragging = false;
        let before = self.state.pending_files.len();
        self.state.append_files(names);
        tracing::debug!(
            "Dropped {} file(s), {} pending",
            self.state.pending_files.len() - before,
            self.state.pending_files.len()
        );
    }

    pub fn submit(&mut self) {
        self.state.is_processing = true;

        if !self.state.is_polling() {
            tracing::debug!("Starting status poll every {:?}", self.poll_interval);
            self.state.poller = Some(Poller::spawn(
                self.runtime.handle(),
                self.client.clone(),
                self.poll_interval,
                self.event_sender.clone(),
            ));
        }

        let names = self.state.pending_files.clone();
        let client = self.client.clone();
        let sender = self.event_sender.clone();
        tracing::info!("Submitting {} file name(s)", names.len());

        self.runtime.spawn(async move {
            let result = client.upload_file_names(&names).await;
            let _ = sender.send(BackendEvent::Submitted(result));
        });
    }

    pub fn reset(&mut self) {
        tracing::info!("Resetting drop zone");
        self.state.reset();
    }

    /// Apply every finished backend call to the state. Returns whether
    /// anything was applied.
    pub fn pump_events(&mut self) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.event_receiver.try_recv() {
            had_updates = true;
            self.apply_event(event);
        }
        had_updates
    }

    fn apply_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Submitted(Ok(body)) => {
                tracing::info!("Response: {}", body);
                self.state.pending_files.clear();
            }
            BackendEvent::Submitted(Err(e)) => {
                tracing::error!("Error uploading file names: {}", e);
            }
            BackendEvent::Polled(Ok(status)) => {
                let idle = status.is_idle();
                self.state.status = status;
                if idle {
                    self.state.is_processing = false;
                    self.state.stop_polling();
                }
            }
            BackendEvent::Polled(Err(e)) => {
                tracing::warn!("Error fetching processing status: {}", e);
            }
        }
    }

    fn collect_file_drops(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if hovering {
            self.handle_drag_over();
        } else if self.state.dragging {
            self.handle_drag_leave();
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_drop(dropped.iter().filter_map(dropped_file_name));
        }
    }
}

/// The platform-provided name, else the last path component. Contents are never read.
fn dropped_file_name(file: &egui::DroppedFile) -> Option<String> {
    if !file.name.is_empty() {
        return Some(file.name.clone());
    }
    file.path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
}

impl App for DropZoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pump_events() {
            ctx.request_repaint();
        }
        self.collect_file_drops(ctx);
        self.render(ctx);

        if self.state.is_processing {
            ctx.request_repaint_after(PROCESSING_REPAINT);
        }
    }
}
