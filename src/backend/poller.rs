use crate::backend::client::BackendClient;
use crate::backend::types::BackendEvent;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Cancellable handle to a running status poll loop. Dropping it stops the loop.
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    /// True once the loop has exited, either on an idle status or because the
    /// receiving side went away.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct Poller;

impl Poller {
    /// Start polling the status endpoint every `interval`, first tick one
    /// interval from now. Each request completes before the next tick is
    /// awaited.
    pub fn spawn(
        runtime: &Handle,
        client: BackendClient,
        interval: Duration,
        events: Sender<BackendEvent>,
    ) -> PollHandle {
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                tracing::debug!("Polling processing status");

                let result = client.fetch_status().await;
                let finished = matches!(&result, Ok(status) if status.is_idle());

                if events.send(BackendEvent::Polled(result)).is_err() {
                    tracing::debug!("Status receiver dropped, stopping poll loop");
                    break;
                }
                if finished {
                    tracing::info!("Backend reported idle, polling stopped");
                    break;
                }
            }
        });

        PollHandle { task }
    }
}
