//! The client runtime: request assembly, credentials, negotiation and
//! dispatch.
//!
//! [`ApiClient`] is the entry point. It is cheap to clone and safe to share
//! across tasks; each generated service borrows it and turns method calls into
//! [`Call`] handles.

use std::sync::Arc;

mod builder;
mod codec;
mod config;
mod credentials;
mod dispatch;
mod endpoint;
mod error;
mod negotiation;
mod param;
mod transport;

pub use self::builder::ApiClientBuilder;
pub use self::codec::{ParameterCodec, PercentCodec};
pub use self::config::Configuration;
pub use self::credentials::{CredentialSource, SecureString};
pub use self::dispatch::{ApiResponse, Call, CallEvent, CallEvents, RawResponse};
pub use self::endpoint::{
    CallArgs, CredentialPlacement, CredentialSpec, EndpointSpec, ParamLocation, ParamSpec,
    RequestDescriptor,
};
pub use self::error::ApiClientError;
pub use self::negotiation::{is_json_mime, ResponseKind};
pub use self::param::{serialize as serialize_param, ParamStyle, ParamValue};
pub use self::transport::{BodyChunks, BoxFuture, Transport, TransportReply};

use crate::api::{
    AuthApi, ProjectUsersApi, ProjectsApi, ReportsApi, TasksApi, TimeLogsApi, UsersApi,
};

/// Typed client for the FlowBoard task board API.
///
/// Construct one through [`ApiClient::builder`], then reach the endpoint
/// groups through the service accessors:
///
/// ```rust,no_run
/// use flowboard_api::ApiClient;
///
/// # async fn demo() -> Result<(), flowboard_api::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_base_path("https://flowboard.example.com/api")
///     .with_access_token("eyJhbGciOi...")
///     .build()?;
///
/// let tasks = client.tasks().get_all_tasks()?.await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<Configuration>,
}

impl ApiClient {
    /// Starts a builder with default configuration.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub(crate) fn new(transport: Arc<dyn Transport>, config: Arc<Configuration>) -> Self {
        Self { transport, config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Assembles a request for `spec` and wraps it into a dispatchable call.
    ///
    /// Fails synchronously on validation problems, so no network activity
    /// happens for a malformed call.
    pub(crate) fn call<T>(
        &self,
        spec: &EndpointSpec,
        args: CallArgs,
    ) -> Result<Call<T>, ApiClientError> {
        let request = endpoint::build_request(spec, &args, &self.config)?;
        Ok(Call::new(
            Arc::clone(&self.transport),
            Arc::clone(&self.config),
            request,
        ))
    }

    /// Authentication endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Task endpoints.
    #[must_use]
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Project endpoints.
    #[must_use]
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Project membership endpoints.
    #[must_use]
    pub fn project_users(&self) -> ProjectUsersApi<'_> {
        ProjectUsersApi::new(self)
    }

    /// Time log endpoints.
    #[must_use]
    pub fn time_logs(&self) -> TimeLogsApi<'_> {
        TimeLogsApi::new(self)
    }

    /// User endpoints.
    #[must_use]
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Report endpoints.
    #[must_use]
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;
    use http::header::{ACCEPT, AUTHORIZATION};
    use http::{HeaderMap, Method, StatusCode};
    use uuid::Uuid;

    use super::transport::{BodyChunks, BoxFuture, TransportReply};
    use super::*;

    /// Records every request and replies with a canned status and body.
    #[derive(Debug, Clone)]
    struct MockTransport {
        status: StatusCode,
        body: Bytes,
        calls: Arc<AtomicUsize>,
        requests: Arc<Mutex<Vec<RequestDescriptor>>>,
    }

    impl MockTransport {
        fn replying(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body: Bytes::from_static(body.as_bytes()),
                calls: Arc::new(AtomicUsize::new(0)),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn recorded(&self) -> Vec<RequestDescriptor> {
            std::mem::take(&mut *self.requests.lock().expect("requests lock"))
        }
    }

    impl Transport for MockTransport {
        fn send(
            &self,
            request: RequestDescriptor,
            _ambient_credentials: bool,
        ) -> BoxFuture<'_, Result<TransportReply, ApiClientError>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.requests.lock().expect("requests lock").push(request);
                // split the body so progress events see more than one chunk
                let half = self.body.len() / 2;
                let chunks = if self.body.is_empty() {
                    VecDeque::new()
                } else {
                    VecDeque::from([self.body.slice(..half), self.body.slice(half..)])
                };
                Ok(TransportReply {
                    status: self.status,
                    headers: HeaderMap::new(),
                    content_length: Some(self.body.len() as u64),
                    body: Box::new(StaticBody { chunks }),
                })
            })
        }
    }

    struct StaticBody {
        chunks: VecDeque<Bytes>,
    }

    impl BodyChunks for StaticBody {
        fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, ApiClientError>> {
            Box::pin(async move { Ok(self.chunks.pop_front()) })
        }
    }

    /// Accepts the request and never produces a response.
    #[derive(Debug)]
    struct StalledTransport;

    impl Transport for StalledTransport {
        fn send(
            &self,
            _request: RequestDescriptor,
            _ambient_credentials: bool,
        ) -> BoxFuture<'_, Result<TransportReply, ApiClientError>> {
            Box::pin(std::future::pending())
        }
    }

    const TASK_BODY: &str = r#"{
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Fix the build",
        "description": null,
        "projectId": null,
        "assignTo": null,
        "bookedTime": null,
        "estimatedTime": "PT4H",
        "storyPoints": 3,
        "status": "OPEN",
        "createdBy": "admin",
        "createdAt": "2025-02-01",
        "lastModifiedBy": null,
        "lastModifiedAt": null
    }"#;

    fn client_with(transport: MockTransport) -> ApiClient {
        ApiClient::builder()
            .with_base_path("http://api.test")
            .with_access_token("tok-abc")
            .with_transport(transport)
            .build()
            .expect("client")
    }

    #[tokio::test]
    async fn get_task_by_id_sends_one_bearer_request() {
        let transport = MockTransport::replying(StatusCode::OK, TASK_BODY);
        let client = client_with(transport.clone());
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").expect("uuid");

        let task = client
            .tasks()
            .get_task_by_id(id)
            .expect("call")
            .await
            .expect("task");

        assert_eq!(task.name.as_deref(), Some("Fix the build"));
        assert_eq!(transport.call_count(), 1);

        let requests = transport.recorded();
        let request = &requests[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            "http://api.test/tasks/11111111-2222-4333-8444-555555555555"
        );
        let auth: Vec<_> = request.headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0], "Bearer tok-abc");
        assert_eq!(
            request.headers.get(ACCEPT).map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_the_transport() {
        let transport = MockTransport::replying(StatusCode::OK, TASK_BODY);
        let client = client_with(transport.clone());

        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/tasks/{id}",
            params: &[crate::api::ID_PARAM],
            produces: &[],
            accepts: &["application/json"],
            credentials: None,
        };
        let result: Result<Call<serde_json::Value>, _> = client.call(&SPEC, CallArgs::new());

        assert!(matches!(
            result,
            Err(ApiClientError::MissingParameter { ref name }) if name == "id"
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn with_response_keeps_status_and_headers() {
        let transport = MockTransport::replying(StatusCode::OK, TASK_BODY);
        let client = client_with(transport);

        let response = client
            .auth()
            .get_current_user()
            .expect("call")
            .with_response()
            .await
            .expect("response");

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], "OPEN");
    }

    #[tokio::test]
    async fn unsuccessful_status_decodes_the_error_payload() {
        let transport =
            MockTransport::replying(StatusCode::NOT_FOUND, r#"{"message":"no such task"}"#);
        let client = client_with(transport);
        let id = Uuid::nil();

        let error = client
            .tasks()
            .get_task_by_id(id)
            .expect("call")
            .await
            .expect_err("should fail");

        match error {
            ApiClientError::UnsuccessfulStatus { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, Some(serde_json::json!({"message": "no such task"})));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn into_raw_reports_any_status_without_decoding() {
        let transport = MockTransport::replying(StatusCode::IM_A_TEAPOT, "short and stout");
        let client = client_with(transport);

        let raw = client
            .tasks()
            .get_all_tasks()
            .expect("call")
            .into_raw()
            .await
            .expect("raw");

        assert_eq!(raw.status, StatusCode::IM_A_TEAPOT);
        assert_eq!(raw.body.as_ref(), b"short and stout");
    }

    #[tokio::test]
    async fn event_stream_reports_the_full_lifecycle() {
        let transport = MockTransport::replying(StatusCode::OK, TASK_BODY);
        let client = client_with(transport);
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").expect("uuid");

        let mut events = client.tasks().get_task_by_id(id).expect("call").events();

        assert!(matches!(events.next().await, Some(CallEvent::Sent)));
        match events.next().await {
            Some(CallEvent::HeadersReceived { status, .. }) => {
                assert_eq!(status, StatusCode::OK);
            }
            other => panic!("expected headers, got {other:?}"),
        }

        let mut last_loaded = 0;
        loop {
            match events.next().await {
                Some(CallEvent::Progress { loaded, total }) => {
                    assert!(loaded > last_loaded);
                    assert_eq!(total, Some(TASK_BODY.len() as u64));
                    last_loaded = loaded;
                }
                Some(CallEvent::Done(response)) => {
                    assert_eq!(response.body.status, Some(crate::models::TaskStatus::Open));
                    break;
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(last_loaded, TASK_BODY.len() as u64);
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn cancelling_the_event_stream_aborts_the_request() {
        let client = ApiClient::builder()
            .with_base_path("http://api.test")
            .with_transport(StalledTransport)
            .build()
            .expect("client");

        let mut events = client.tasks().get_all_tasks().expect("call").events();
        assert!(matches!(events.next().await, Some(CallEvent::Sent)));

        events.cancel();
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn provider_tokens_rotate_between_calls() {
        let transport = MockTransport::replying(StatusCode::OK, "[]");
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);
        let client = ApiClient::builder()
            .with_base_path("http://api.test")
            .with_access_token_provider(move || {
                Some(format!("t{}", seen.fetch_add(1, Ordering::SeqCst)))
            })
            .with_transport(transport.clone())
            .build()
            .expect("client");

        let _: Vec<crate::models::TaskDto> =
            client.tasks().get_all_tasks().expect("call").await.expect("first");
        let _: Vec<crate::models::TaskDto> =
            client.tasks().get_all_tasks().expect("call").await.expect("second");

        let requests = transport.recorded();
        let tokens: Vec<_> = requests
            .iter()
            .map(|request| {
                request
                    .headers
                    .get(AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .expect("auth header")
                    .to_string()
            })
            .collect();
        assert_eq!(tokens, ["Bearer t0", "Bearer t1"]);
    }

    #[tokio::test]
    async fn delete_decodes_an_empty_body_as_unit() {
        let transport = MockTransport::replying(StatusCode::NO_CONTENT, "");
        let client = client_with(transport.clone());

        client
            .tasks()
            .delete_task(Uuid::nil())
            .expect("call")
            .await
            .expect("deleted");

        let requests = transport.recorded();
        assert_eq!(requests[0].method, Method::DELETE);
        assert!(requests[0].headers.get(ACCEPT).is_none());
    }
}
