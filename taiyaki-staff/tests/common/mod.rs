// taiyaki-staff/tests/common/mod.rs
// In-process stand-in for the order backend

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// Canned reply for one method + path
#[derive(Debug, Clone)]
pub struct Stub {
    pub method: Method,
    pub path: &'static str,
    pub status: u16,
    pub body: &'static str,
    /// When set, requests without `Authorization: Bearer <token>` get a 401
    pub bearer: Option<&'static str>,
}

impl Stub {
    pub fn new(method: Method, path: &'static str, status: u16, body: &'static str) -> Self {
        Self {
            method,
            path,
            status,
            body,
            bearer: None,
        }
    }

    pub fn requiring(mut self, token: &'static str) -> Self {
        self.bearer = Some(token);
        self
    }
}

/// A request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct MockState {
    stubs: Vec<Stub>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start(stubs: Vec<Stub>) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("taiyaki_staff=debug")
            .try_init();

        let state = Arc::new(MockState {
            stubs,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the backend")
    }
}

/// Base URL on which nothing is listening
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let authorization = header_text(header::AUTHORIZATION);

    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        uri: uri.to_string(),
        authorization: authorization.clone(),
        content_type: header_text(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let stub = state
        .stubs
        .iter()
        .find(|s| s.method == method && s.path == uri.path());

    let Some(stub) = stub else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(token) = stub.bearer
        && authorization.as_deref() != Some(format!("Bearer {}", token).as_str())
    {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let status = StatusCode::from_u16(stub.status).unwrap();
    if stub.body.is_empty() {
        return status.into_response();
    }
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
        .into_response()
}
