use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::config::Configuration;
use super::endpoint::RequestDescriptor;
use super::error::ApiClientError;
use super::negotiation::ResponseKind;
use super::transport::Transport;

/// A decoded response together with its status line and headers.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded body.
    pub body: T,
}

/// An undecoded response: status, headers and the raw body bytes.
///
/// Returned by [`Call::into_raw`]; the status is reported as received, even
/// when it is not a success.
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code, 2xx or not.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The body, unparsed.
    pub body: Bytes,
}

/// A prepared call, ready to dispatch.
///
/// Awaiting the handle directly yields the decoded body. Richer shapes are a
/// method away:
///
/// - [`with_response`](Self::with_response) keeps status and headers alongside
///   the decoded body;
/// - [`into_raw`](Self::into_raw) skips decoding and the success check;
/// - [`events`](Self::events) dispatches in the background and reports the
///   request lifecycle as a stream.
///
/// The request is already fully assembled at this point; parameter validation
/// happened before the handle was handed out.
#[derive(Debug)]
pub struct Call<T> {
    transport: Arc<dyn Transport>,
    config: Arc<Configuration>,
    request: RequestDescriptor,
    _result: PhantomData<fn() -> T>,
}

impl<T> Call<T> {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        config: Arc<Configuration>,
        request: RequestDescriptor,
    ) -> Self {
        Self {
            transport,
            config,
            request,
            _result: PhantomData,
        }
    }

    async fn collect(self) -> Result<(RawResponse, ResponseKind), ApiClientError> {
        let kind = self.request.response_kind;
        let ambient = self.config.send_ambient_credentials();
        let mut reply = self.transport.send(self.request, ambient).await?;

        let mut buffer = Vec::new();
        while let Some(chunk) = reply.body.next_chunk().await? {
            buffer.extend_from_slice(&chunk);
        }

        Ok((
            RawResponse {
                status: reply.status,
                headers: reply.headers,
                body: Bytes::from(buffer),
            },
            kind,
        ))
    }

    /// Dispatches the call and returns the raw response without decoding.
    ///
    /// No success check is applied, so callers can inspect headers and error
    /// payloads of non-2xx responses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Transport`] when the request could not be
    /// sent or the body could not be read.
    pub async fn into_raw(self) -> Result<RawResponse, ApiClientError> {
        let (raw, _) = self.collect().await?;
        Ok(raw)
    }
}

impl<T> Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Dispatches the call and decodes the body, keeping status and headers.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Transport`] on network failure.
    /// - [`ApiClientError::UnsuccessfulStatus`] on a non-2xx status, with the
    ///   error payload decoded when it was JSON.
    /// - [`ApiClientError::Json`] when the body does not match `T`.
    pub async fn with_response(self) -> Result<ApiResponse<T>, ApiClientError> {
        let (raw, kind) = self.collect().await?;
        let body = decode_body(kind, raw.status, &raw.body)?;
        Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            body,
        })
    }

    /// Dispatches in the background and returns the lifecycle event stream.
    ///
    /// Dropping the stream, or calling [`CallEvents::cancel`], aborts the
    /// in-flight request.
    pub fn events(self) -> CallEvents<T> {
        let (sender, receiver) = mpsc::channel(16);
        let kind = self.request.response_kind;
        let ambient = self.config.send_ambient_credentials();
        let transport = Arc::clone(&self.transport);
        let request = self.request;

        let handle = tokio::spawn(async move {
            let _ = sender.send(CallEvent::Sent).await;
            let mut reply = match transport.send(request, ambient).await {
                Ok(reply) => reply,
                Err(error) => {
                    let _ = sender.send(CallEvent::Failed(error)).await;
                    return;
                }
            };

            let status = reply.status;
            let headers = reply.headers.clone();
            let total = reply.content_length;
            let _ = sender
                .send(CallEvent::HeadersReceived {
                    status,
                    headers: reply.headers,
                })
                .await;

            let mut buffer = Vec::new();
            let mut loaded: u64 = 0;
            loop {
                match reply.body.next_chunk().await {
                    Ok(Some(chunk)) => {
                        loaded += chunk.len() as u64;
                        buffer.extend_from_slice(&chunk);
                        let _ = sender.send(CallEvent::Progress { loaded, total }).await;
                    }
                    Ok(None) => break,
                    Err(error) => {
                        let _ = sender.send(CallEvent::Failed(error)).await;
                        return;
                    }
                }
            }

            let body = Bytes::from(buffer);
            let event = match decode_body(kind, status, &body) {
                Ok(decoded) => CallEvent::Done(ApiResponse {
                    status,
                    headers,
                    body: decoded,
                }),
                Err(error) => CallEvent::Failed(error),
            };
            let _ = sender.send(event).await;
        });

        CallEvents { receiver, handle }
    }
}

impl<T> IntoFuture for Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<T, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { Ok(self.with_response().await?.body) })
    }
}

/// One step in the lifecycle of a dispatched call.
#[derive(Debug)]
pub enum CallEvent<T> {
    /// The request was handed to the transport.
    Sent,
    /// Response status and headers arrived; the body is still streaming.
    HeadersReceived {
        /// HTTP status code.
        status: StatusCode,
        /// Response headers.
        headers: HeaderMap,
    },
    /// A body chunk arrived.
    Progress {
        /// Bytes received so far.
        loaded: u64,
        /// Declared body length, when the server sent one.
        total: Option<u64>,
    },
    /// The call finished; carries the decoded response. Terminal.
    Done(ApiResponse<T>),
    /// The call failed at any stage. Terminal.
    Failed(ApiClientError),
}

/// Receiving half of a lifecycle stream; owns the background dispatch task.
#[derive(Debug)]
pub struct CallEvents<T> {
    receiver: mpsc::Receiver<CallEvent<T>>,
    handle: JoinHandle<()>,
}

impl<T> CallEvents<T> {
    /// Waits for the next event. `None` after a terminal event, or after
    /// cancellation.
    pub async fn next(&mut self) -> Option<CallEvent<T>> {
        self.receiver.recv().await
    }

    /// Aborts the in-flight request. No further events are delivered.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl<T> Drop for CallEvents<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn decode_body<T: DeserializeOwned>(
    kind: ResponseKind,
    status: StatusCode,
    body: &Bytes,
) -> Result<T, ApiClientError> {
    if !status.is_success() {
        warn!(%status, "unsuccessful response");
        return Err(unsuccessful_status(status, body));
    }
    match kind {
        ResponseKind::Text => {
            let Ok(text) = std::str::from_utf8(body) else {
                return Err(ApiClientError::InvalidUtf8Body);
            };
            serde_json::from_value(serde_json::Value::String(text.to_string())).map_err(|error| {
                ApiClientError::Json {
                    path: ".".to_string(),
                    error,
                    body: text.to_string(),
                }
            })
        }
        // binary payloads are served undecoded through into_raw; a typed
        // decode falls back to JSON
        ResponseKind::Json | ResponseKind::Binary => decode_json(body),
    }
}

fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiClientError> {
    // an empty body decodes like an explicit null, so `()` and Option targets
    // accept 204-style responses
    let slice: &[u8] = if body.is_empty() { b"null" } else { body };
    let mut deserializer = serde_json::Deserializer::from_slice(slice);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
        let path = error.path().to_string();
        debug!(path, "response body did not match the expected shape");
        ApiClientError::Json {
            path,
            error: error.into_inner(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    })
}

fn unsuccessful_status(status: StatusCode, body: &Bytes) -> ApiClientError {
    let payload = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<serde_json::Value>(body).ok().or_else(|| {
            std::str::from_utf8(body)
                .ok()
                .map(|text| serde_json::Value::String(text.to_string()))
        })
    };
    ApiClientError::UnsuccessfulStatus {
        status,
        body: payload,
    }
}
