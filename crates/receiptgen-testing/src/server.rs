//! Local HTTP stand-in for the receipt generation service.

use anyhow::Result;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const GENERATE_PATH: &str = "/generate.php";

/// What the stub answers to every POST
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubReply {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: value.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

async fn handle_generate(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status =
        StatusCode::from_u16(state.reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, state.reply.content_type)],
        state.reply.body.clone(),
    )
        .into_response()
}

/// axum server bound to an ephemeral localhost port; stops on drop
pub struct StubServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    task: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(reply: StubReply) -> Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(GENERATE_PATH, post(handle_generate))
            .with_state(StubState {
                reply,
                received: received.clone(),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            received,
            task,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, GENERATE_PATH)
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// An endpoint nothing listens on
pub fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}{}", addr, GENERATE_PATH)
}
