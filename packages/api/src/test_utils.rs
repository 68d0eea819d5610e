use crate::config::UpstreamConfig;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned answer for one locale.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
}

impl StubReply {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

#[derive(Clone)]
struct StubState {
    replies: Arc<HashMap<String, StubReply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Stand-in for the command service.
///
/// Answers `GET /commands?locale=<code>` with the reply registered for that
/// code (404 otherwise) and records every request target it sees.
pub struct StubUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl StubUpstream {
    pub async fn start(replies: HashMap<String, StubReply>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = StubState {
            replies: Arc::new(replies),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/commands", get(handle_commands))
            .with_state(state);
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            requests,
            task,
        })
    }

    /// Convenience for the common single-locale case.
    pub async fn with_reply(locale_code: &str, reply: StubReply) -> std::io::Result<Self> {
        Self::start(HashMap::from([(locale_code.to_string(), reply)])).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request targets received so far, e.g. `/commands?locale=fr`.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle_commands(
    State(state): State<StubState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    if let Ok(mut seen) = state.requests.lock() {
        seen.push(target);
    }

    let reply = params
        .get("locale")
        .and_then(|code| state.replies.get(code).cloned())
        .unwrap_or_else(|| StubReply::status(404));
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Installs an [`AppState`] pointing at a stub upstream for the current
/// thread; `#[tokio::test]` runs on a single thread so server functions
/// called from the test see it.
pub struct TestContext {
    pub upstream: StubUpstream,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub async fn new(replies: HashMap<String, StubReply>) -> Self {
        let upstream = StubUpstream::start(replies)
            .await
            .expect("Failed to start stub upstream");
        let config = UpstreamConfig {
            base_url: upstream.base_url(),
            timeout: Some(std::time::Duration::from_secs(5)),
        };
        let state = Arc::new(AppState::from_config(config).expect("Failed to build AppState"));
        Self { upstream, state }
    }

    pub fn set_global(&self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });
    }
}
