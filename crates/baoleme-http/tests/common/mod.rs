#![allow(dead_code)]

use async_trait::async_trait;
use baoleme_http::types::Body;
use baoleme_http::{
    ApiClient, ApiError, ApiNetwork, ApiRequest, ApiResponse, ClientConfig, KeyValueStore,
    MemoryStore, RecordingNotifier, Result, SessionManager,
};
use http::Method;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

pub const BASE_URL: &str = "http://food.test/api";

/// Transport double answering from per-route queues of scripted replies.
///
/// Unscripted routes answer 404, so a test notices calls it did not expect.
#[derive(Default)]
pub struct ScriptedNetwork {
    routes: Mutex<HashMap<(Method, String), VecDeque<Result<ApiResponse>>>>,
    requests: Mutex<Vec<(String, ApiRequest)>>,
}

impl ScriptedNetwork {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, method: Method, path: &str, reply: Result<ApiResponse>) {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// Answer with a `code: 200` envelope around `data`.
    pub fn ok(&self, method: Method, path: &str, data: Value) {
        let body = json!({"success": true, "code": 200, "message": "success", "data": data});
        self.reply(method, path, Ok(ApiResponse::json(200, &body)));
    }

    /// Answer HTTP 200 with a rejecting envelope.
    pub fn fail(&self, method: Method, path: &str, code: i64, message: &str) {
        let body = json!({"success": false, "code": code, "message": message, "data": null});
        self.reply(method, path, Ok(ApiResponse::json(200, &body)));
    }

    pub fn status(&self, method: Method, path: &str, status: u16) {
        self.reply(method, path, Ok(ApiResponse::new(status, "")));
    }

    pub fn unreachable(&self, method: Method, path: &str) {
        self.reply(
            method,
            path,
            Err(ApiError::Network {
                timed_out: false,
                detail: "connection refused".to_string(),
            }),
        );
    }

    pub fn requests(&self) -> Vec<(String, ApiRequest)> {
        self.requests.lock().clone()
    }

    /// Requests sent to `path`, in order.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|(_, r)| r.path == path)
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn last_to(&self, path: &str) -> ApiRequest {
        self.requests_to(path)
            .pop()
            .unwrap_or_else(|| panic!("no request sent to {}", path))
    }
}

#[async_trait]
impl ApiNetwork for ScriptedNetwork {
    async fn fetch(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
        let path = url
            .strip_prefix(BASE_URL)
            .unwrap_or(url)
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();
        self.requests.lock().push((url.to_string(), request.clone()));

        let reply = self
            .routes
            .lock()
            .get_mut(&(request.method.clone(), path))
            .and_then(VecDeque::pop_front);
        reply.unwrap_or_else(|| Ok(ApiResponse::new(404, "")))
    }
}

pub struct Harness {
    pub network: Arc<ScriptedNetwork>,
    pub store: Arc<dyn KeyValueStore>,
    pub session: Arc<SessionManager>,
    pub notifier: Arc<RecordingNotifier>,
    pub client: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        let network = ScriptedNetwork::new();
        let session = Arc::new(SessionManager::new(store.clone()));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = ApiClient::with_network(
            network.clone(),
            ClientConfig::default().with_base_url(BASE_URL),
            session.clone(),
        )
        .with_notifier(notifier.clone());

        Self {
            network,
            store,
            session,
            notifier,
            client,
        }
    }
}

/// Names and contents of the multipart fields of `request`.
pub fn form_fields(request: &ApiRequest) -> Vec<(String, String)> {
    use baoleme_http::types::FormPart;
    match &request.body {
        Body::Multipart(parts) => parts
            .iter()
            .map(|part| match part {
                FormPart::File {
                    name, file_name, ..
                } => (name.clone(), file_name.clone()),
                FormPart::Text { name, value } => (name.clone(), value.clone()),
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn json_body(request: &ApiRequest) -> Value {
    match &request.body {
        Body::Json(bytes) => serde_json::from_slice(bytes).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
