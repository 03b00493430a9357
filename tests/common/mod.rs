#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use gz_dropzone::app::{DropZoneApp, DropZoneState};
use gz_dropzone::backend::{STATUS_PATH, UPLOAD_PATH};
use gz_dropzone::config::ClientConfig;

pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One scripted answer from the status endpoint.
#[derive(Clone)]
pub enum StatusReply {
    Json(Value),
    Fail,
}

pub fn status(state: &str, files: &[&str]) -> StatusReply {
    StatusReply::Json(json!({ "status": state, "processed_files": files }))
}

#[derive(Default)]
pub struct Recorded {
    pub uploads: Mutex<Vec<Value>>,
    pub status_requests: AtomicUsize,
    pub fail_uploads: AtomicBool,
    replies: Mutex<VecDeque<StatusReply>>,
}

impl Recorded {
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn status_count(&self) -> usize {
        self.status_requests.load(Ordering::SeqCst)
    }

    /// Replies are consumed in order; the last one repeats forever.
    fn next_reply(&self) -> StatusReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap_or(StatusReply::Fail)
        }
    }
}

/// Stand-in for the processing backend, served from its own runtime.
pub struct MockBackend {
    _runtime: tokio::runtime::Runtime,
    pub base_url: String,
    pub recorded: Arc<Recorded>,
}

impl MockBackend {
    pub fn start(replies: Vec<StatusReply>) -> Self {
        let recorded = Arc::new(Recorded {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        });

        let router = Router::new()
            .route(UPLOAD_PATH, post(upload))
            .route(STATUS_PATH, get(processing_status))
            .with_state(recorded.clone());

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();
        runtime.spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            _runtime: runtime,
            base_url: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn app(&self) -> DropZoneApp {
        let config = ClientConfig {
            backend_url: self.base_url.clone(),
            poll_interval: TEST_POLL_INTERVAL,
        };
        DropZoneApp::new(&config).unwrap()
    }
}

async fn upload(State(recorded): State<Arc<Recorded>>, Json(body): Json<Value>) -> Response {
    recorded.uploads.lock().unwrap().push(body);
    if recorded.fail_uploads.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({ "status": "received" })).into_response()
}

async fn processing_status(State(recorded): State<Arc<Recorded>>) -> Response {
    recorded.status_requests.fetch_add(1, Ordering::SeqCst);
    match recorded.next_reply() {
        StatusReply::Json(body) => Json(body).into_response(),
        StatusReply::Fail => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Pump backend events into the app until `check` holds or `timeout` passes.
pub fn wait_until<F>(app: &mut DropZoneApp, timeout: Duration, check: F) -> bool
where
    F: Fn(&DropZoneState) -> bool,
{
    let start = Instant::now();
    loop {
        app.pump_events();
        if check(app.state()) {
            return true;
        }
        if start.elapsed() > timeout {
            return false;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
