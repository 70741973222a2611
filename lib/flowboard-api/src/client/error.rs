use http::StatusCode;

/// Errors surfaced by the FlowBoard client.
///
/// Validation problems (`MissingParameter`, `Encoding`) are raised synchronously
/// while the request is being built, before the transport is involved. Transport
/// and status failures are delivered through the same asynchronous channel as a
/// successful result. The client never retries on its own.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// A parameter the endpoint declares as required was not supplied.
    ///
    /// Raised before any network activity; the call never reaches the transport.
    #[display("Required parameter '{name}' was null or undefined")]
    #[from(skip)]
    MissingParameter {
        /// Name of the missing parameter, as declared by the endpoint.
        name: String,
    },

    /// A value could not be serialized into path or query form.
    ///
    /// Typically a scalar or date handed to the serializer without a key.
    #[display("Encoding error: {message}")]
    #[from(skip)]
    Encoding {
        /// Description of the serialization failure.
        message: String,
    },

    /// Network or protocol failure from the underlying HTTP client.
    Transport(reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// Carries the decoded error body when the payload was JSON, so callers can
    /// act on structured error responses.
    #[display("Unsuccessful status code {status}")]
    #[from(skip)]
    UnsuccessfulStatus {
        /// The HTTP status code received.
        status: StatusCode,
        /// Error payload decoded as JSON when possible, raw text otherwise.
        body: Option<serde_json::Value>,
    },

    /// URL parsing error when assembling the absolute request URL.
    Url(url::ParseError),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    ///
    /// Occurs when a resolved credential or negotiated media type contains
    /// characters that are not legal in a header.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// The response body could not be decoded as the expected JSON structure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    Json {
        /// JSON path where deserialization failed.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// A request body or structured parameter value failed to serialize to JSON.
    Serialization(serde_json::Error),

    /// A text response was not valid UTF-8.
    #[display("Response body is not valid UTF-8")]
    #[from(skip)]
    InvalidUtf8Body,
}

impl ApiClientError {
    pub(crate) fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub(crate) fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ApiClientError>();
        assert_sync::<ApiClientError>();
    }

    #[test]
    fn test_missing_parameter_display() {
        let error = ApiClientError::missing_parameter("id");
        insta::assert_snapshot!(error, @"Required parameter 'id' was null or undefined");
    }

    #[test]
    fn test_unsuccessful_status_display() {
        let error = ApiClientError::UnsuccessfulStatus {
            status: StatusCode::NOT_FOUND,
            body: None,
        };
        insta::assert_snapshot!(error, @"Unsuccessful status code 404 Not Found");
    }
}
