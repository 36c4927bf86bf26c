//! Main delivery API client: the single egress point for network calls.

use crate::client::config::ClientConfig;
use crate::client::headers::{bearer_value, AUTHORIZATION_HEADER};
use crate::client::native_network::NativeNetwork;
use crate::client::notify::LogNotifier;
use crate::client::utils::{envelope_message, status_message};
use crate::error::{ApiError, Result};
use crate::session::SessionManager;
use crate::traits::{ApiNetwork, Notifier};
use crate::types::envelope::RawEnvelope;
use crate::types::{ApiRequest, ApiResponse, Credential, Envelope, Role};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The delivery API client.
///
/// Cloning is cheap; clones share the network, session and notifier. No
/// per-request state is kept between calls.
#[derive(Clone)]
pub struct ApiClient {
    network: Arc<dyn ApiNetwork>,
    config: Arc<ClientConfig>,
    session: Arc<SessionManager>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(session: Arc<SessionManager>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), session)
    }

    pub fn with_config(config: ClientConfig, session: Arc<SessionManager>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_secs(config.connection_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90));

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url)
                .map_err(|e| ApiError::Config(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self::with_network(
            Arc::new(NativeNetwork::new(client)),
            config,
            session,
        ))
    }

    /// Build on an arbitrary transport.
    pub fn with_network(
        network: Arc<dyn ApiNetwork>,
        config: ClientConfig,
        session: Arc<SessionManager>,
    ) -> Self {
        ApiClient {
            network,
            config: Arc::new(config),
            session,
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Send `request` and normalize the answer.
    ///
    /// Resolves only with a `code == 200` envelope. Every other outcome is an
    /// error that has already been shown through the notifier.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Envelope<T>> {
        let url = match self.config.endpoint_url(&request.path, &request.query) {
            Ok(url) => url,
            Err(e) => return Err(self.reject(e)),
        };
        let request = self.authorize(request);

        if self.config.enable_logging {
            debug!(
                "[ApiClient-Out] {} {} credential={} auth={}",
                request.method,
                url,
                credential_label(&request.credential),
                request.header(AUTHORIZATION_HEADER).is_some()
            );
        }

        let deadline = Duration::from_millis(self.config.request_timeout_ms);
        let sent = tokio::time::timeout(deadline, self.network.fetch(&url, request)).await;
        let response = match sent {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(self.reject(e)),
            Err(_) => {
                return Err(self.reject(ApiError::Network {
                    timed_out: true,
                    detail: format!("no response within {}ms", self.config.request_timeout_ms),
                }))
            }
        };

        if self.config.enable_logging {
            debug!("[ApiClient-In] {} status={}", url, response.status);
        }

        self.normalize(response)
    }

    /// Bearer token the outgoing interceptor would attach for `credential`.
    ///
    /// Role tokens are read from durable storage, not memory, so a login made
    /// by another process sharing the store is picked up.
    pub fn resolve_token(&self, credential: &Credential) -> Option<String> {
        match credential {
            Credential::Anonymous => None,
            Credential::Bearer(token) => Some(token.clone()).filter(|t| !t.is_empty()),
            Credential::Role(role) => self.session.stored_token(*role),
            Credential::Path(path) => match Role::from_path(path) {
                Some(role) => self.session.stored_token(role),
                None => {
                    debug!("[ApiClient] No role for path {:?}; sending unauthenticated", path);
                    None
                }
            },
        }
    }

    /// Outgoing interceptor.
    fn authorize(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(value) = self
            .resolve_token(&request.credential)
            .as_deref()
            .and_then(bearer_value)
        {
            request.headers.insert(AUTHORIZATION_HEADER.to_string(), value);
        }
        request
    }

    /// Incoming interceptor.
    fn normalize<T: DeserializeOwned>(&self, response: ApiResponse) -> Result<Envelope<T>> {
        if !response.is_success() {
            let server_message = RawEnvelope::parse(&response.body)
                .ok()
                .map(|raw| raw.message);
            let message = status_message(response.status, server_message.as_deref());
            return Err(self.reject(ApiError::Status {
                status: response.status,
                message,
                response,
            }));
        }

        let raw = match RawEnvelope::parse(&response.body) {
            Ok(raw) => raw,
            Err(e) => return Err(self.reject(ApiError::Malformed(e.to_string()))),
        };

        if !raw.is_ok() {
            return Err(self.reject(ApiError::Envelope {
                code: raw.code,
                message: envelope_message(&raw.message),
            }));
        }

        raw.decode::<T>()
            .map_err(|e| self.reject(ApiError::Decode(e.to_string())))
    }

    /// Surface `error` to the user once, then hand it back to the caller.
    fn reject(&self, error: ApiError) -> ApiError {
        warn!("[ApiClient] Request failed: {} ({:?})", error, error);
        self.notifier.error(&error.to_string());
        error
    }
}

fn credential_label(credential: &Credential) -> String {
    match credential {
        Credential::Anonymous => "anonymous".to_string(),
        Credential::Role(role) => format!("role:{}", role),
        Credential::Path(path) => format!("path:{}", path),
        Credential::Bearer(_) => "bearer".to_string(),
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::notify::RecordingNotifier;
    use crate::session::MemoryStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    /// Answers every call with one canned result and keeps the requests.
    struct CannedNetwork {
        reply: Mutex<Option<Result<ApiResponse>>>,
        seen: Mutex<Vec<(String, ApiRequest)>>,
    }

    impl CannedNetwork {
        fn new(reply: Result<ApiResponse>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn last(&self) -> (String, ApiRequest) {
            self.seen.lock().last().cloned().expect("no request sent")
        }
    }

    #[async_trait]
    impl ApiNetwork for CannedNetwork {
        async fn fetch(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
            self.seen.lock().push((url.to_string(), request));
            self.reply
                .lock()
                .take()
                .unwrap_or_else(|| Ok(ApiResponse::json(200, &json!({"code": 200, "data": null}))))
        }
    }

    fn client(
        network: Arc<CannedNetwork>,
    ) -> (ApiClient, Arc<SessionManager>, Arc<RecordingNotifier>) {
        let session = Arc::new(SessionManager::new(Arc::new(MemoryStore::new())));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = ApiClient::with_network(
            network,
            ClientConfig::default().with_base_url("http://food.test/api"),
            session.clone(),
        )
        .with_notifier(notifier.clone());
        (client, session, notifier)
    }

    fn ok_body() -> Result<ApiResponse> {
        Ok(ApiResponse::json(
            200,
            &json!({"success": true, "code": 200, "message": "success", "data": {"n": 1}}),
        ))
    }

    #[tokio::test]
    async fn test_path_selects_rider_token() {
        let network = CannedNetwork::new(ok_body());
        let (client, session, _) = client(network.clone());
        for role in Role::ALL {
            session.set_token(role, &format!("{}-token", role));
        }

        let request = ApiRequest::get("/rider/info")
            .with_credential(Credential::Path("/rider/home".into()));
        let _: Envelope<serde_json::Value> = client.call(request).await.unwrap();

        let (url, sent) = network.last();
        assert_eq!(url, "http://food.test/api/rider/info");
        assert_eq!(sent.header("authorization"), Some("Bearer rider-token"));
    }

    #[tokio::test]
    async fn test_unknown_path_sends_no_credential() {
        let network = CannedNetwork::new(ok_body());
        let (client, session, _) = client(network.clone());
        for role in Role::ALL {
            session.set_token(role, "t");
        }

        let request =
            ApiRequest::get("/user/current").with_credential(Credential::Path("/checkout".into()));
        let _: Envelope<serde_json::Value> = client.call(request).await.unwrap();

        assert_eq!(network.last().1.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_role_token_read_from_storage() {
        let network = CannedNetwork::new(ok_body());
        let (client, session, _) = client(network.clone());
        session.store().set("merchant_token", "fresh").unwrap();

        let _: Envelope<serde_json::Value> = client
            .call(ApiRequest::get("/merchant/info").as_role(Role::Merchant))
            .await
            .unwrap();
        assert_eq!(network.last().1.header("authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn test_resolves_full_envelope() {
        let network = CannedNetwork::new(ok_body());
        let (client, _, notifier) = client(network);

        #[derive(serde::Deserialize)]
        struct N {
            n: i32,
        }
        let env: Envelope<N> = client.call(ApiRequest::get("/x")).await.unwrap();
        assert_eq!(env.code, 200);
        assert_eq!(env.message, "success");
        assert_eq!(env.data.n, 1);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_envelope_failure_is_notified() {
        let network = CannedNetwork::new(Ok(ApiResponse::json(
            200,
            &json!({"success": false, "code": 400, "message": "bad password", "data": null}),
        )));
        let (client, _, notifier) = client(network);

        let err = client
            .call::<serde_json::Value>(ApiRequest::post("/user/login"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "bad password");
        assert_eq!(err.envelope_code(), Some(400));
        assert_eq!(notifier.messages(), vec!["bad password"]);
    }

    #[tokio::test]
    async fn test_envelope_failure_without_message() {
        let network =
            CannedNetwork::new(Ok(ApiResponse::json(200, &json!({"code": 500, "data": null}))));
        let (client, _, notifier) = client(network);
        let err = client.call::<()>(ApiRequest::get("/x")).await.unwrap_err();
        assert_eq!(err.to_string(), "request failed");
        assert_eq!(notifier.last().as_deref(), Some("request failed"));
    }

    #[tokio::test]
    async fn test_status_messages_are_mapped() {
        let cases = [
            (401, "please log in"),
            (403, "insufficient permission"),
            (404, "resource not found"),
            (500, "server error"),
            (503, "network error"),
        ];
        for (status, expected) in cases {
            let network = CannedNetwork::new(Ok(ApiResponse::new(status, "")));
            let (client, _, notifier) = client(network);
            let err = client.call::<()>(ApiRequest::get("/x")).await.unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.to_string(), expected);
            assert_eq!(notifier.messages(), vec![expected]);
            assert_eq!(err.response().map(|r| r.status), Some(status));
        }
    }

    #[tokio::test]
    async fn test_401_prefers_server_message() {
        let network = CannedNetwork::new(Ok(ApiResponse::json(
            401,
            &json!({"success": false, "code": 401, "message": "token expired"}),
        )));
        let (client, session, _) = client(network);
        session.set_token(Role::User, "old");

        let err = client
            .call::<()>(ApiRequest::get("/user/info").as_role(Role::User))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "token expired");
        // the pipeline never touches session state
        assert!(session.is_logged_in(Role::User));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let network = CannedNetwork::new(Err(ApiError::Network {
            timed_out: false,
            detail: "connection refused".into(),
        }));
        let (client, _, notifier) = client(network);
        let err = client.call::<()>(ApiRequest::get("/x")).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(notifier.messages(), vec!["network connection failed"]);
    }

    /// Never answers within any reasonable deadline.
    struct StalledNetwork;

    #[async_trait]
    impl ApiNetwork for StalledNetwork {
        async fn fetch(&self, _url: &str, _request: ApiRequest) -> Result<ApiResponse> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            ok_body()
        }
    }

    #[tokio::test]
    async fn test_deadline_is_a_transport_failure() {
        let session = Arc::new(SessionManager::in_memory());
        let notifier = Arc::new(RecordingNotifier::new());
        let config = ClientConfig {
            request_timeout_ms: 50,
            ..ClientConfig::default()
        };
        let client = ApiClient::with_network(Arc::new(StalledNetwork), config, session)
            .with_notifier(notifier.clone());

        let err = client.call::<()>(ApiRequest::get("/x")).await.unwrap_err();

        assert!(matches!(err, ApiError::Network { timed_out: true, .. }));
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "network connection failed");
        assert_eq!(notifier.messages(), vec!["network connection failed"]);
    }

    #[tokio::test]
    async fn test_non_envelope_body_is_malformed() {
        let network = CannedNetwork::new(Ok(ApiResponse::new(200, "<html>")));
        let (client, _, notifier) = client(network);
        let err = client.call::<()>(ApiRequest::get("/x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert_eq!(notifier.messages(), vec!["request failed"]);
    }

    #[tokio::test]
    async fn test_data_shape_mismatch_is_decode_error() {
        let network = CannedNetwork::new(Ok(ApiResponse::json(
            200,
            &json!({"code": 200, "data": "not a number"}),
        )));
        let (client, _, _) = client(network);
        let err = client.call::<i64>(ApiRequest::get("/x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_resolve_token_bearer_and_anonymous() {
        let network = CannedNetwork::new(ok_body());
        let (client, session, _) = client(network);
        session.set_token(Role::User, "u");
        assert_eq!(client.resolve_token(&Credential::Anonymous), None);
        assert_eq!(
            client.resolve_token(&Credential::Bearer("b".into())).as_deref(),
            Some("b")
        );
        assert_eq!(client.resolve_token(&Credential::Bearer(String::new())), None);
        assert_eq!(
            client.resolve_token(&Credential::Path("/user/orders".into())).as_deref(),
            Some("u")
        );
    }
}
