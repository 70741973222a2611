use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use tracing::debug;

use super::endpoint::RequestDescriptor;
use super::error::ApiClientError;

/// Boxed future used at the transport seam, keeping the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A response body delivered as a sequence of chunks.
///
/// Chunked delivery is what lets the event stream report download progress
/// without buffering the whole payload first.
pub trait BodyChunks: Send {
    /// Yields the next chunk, or `None` once the body is exhausted.
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, ApiClientError>>;
}

/// Status line, headers and streaming body of a received response.
#[derive(derive_more::Debug)]
pub struct TransportReply {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Declared body length, when the server sent one.
    pub content_length: Option<u64>,
    /// The streaming body.
    #[debug(skip)]
    pub body: Box<dyn BodyChunks>,
}

/// Sends assembled requests over the wire.
///
/// The bundled implementation is [`reqwest::Client`]; tests substitute their
/// own to observe or fabricate traffic. `ambient_credentials` asks the
/// transport to attach ambient state such as cookies. The reqwest
/// implementation manages cookies at client construction and ignores the
/// per-call flag.
pub trait Transport: Debug + Send + Sync {
    /// Sends the request and resolves once response headers are available.
    ///
    /// The body is consumed afterwards through [`TransportReply::body`].
    fn send(
        &self,
        request: RequestDescriptor,
        ambient_credentials: bool,
    ) -> BoxFuture<'_, Result<TransportReply, ApiClientError>>;
}

impl Transport for reqwest::Client {
    fn send(
        &self,
        request: RequestDescriptor,
        _ambient_credentials: bool,
    ) -> BoxFuture<'_, Result<TransportReply, ApiClientError>> {
        let client = self.clone();
        Box::pin(async move {
            debug!(method = %request.method, url = %request.url, "sending request");
            let mut builder = client
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;

            let status = response.status();
            let headers = response.headers().clone();
            let content_length = response.content_length();
            debug!(%status, content_length, "received response headers");

            Ok(TransportReply {
                status,
                headers,
                content_length,
                body: Box::new(ReqwestBody { response }),
            })
        })
    }
}

struct ReqwestBody {
    response: reqwest::Response,
}

impl BodyChunks for ReqwestBody {
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, ApiClientError>> {
        Box::pin(async move { Ok(self.response.chunk().await?) })
    }
}
