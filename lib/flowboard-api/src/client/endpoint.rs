use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use http::Method;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::config::{Configuration, DEFAULT_BASE_PATH};
use super::error::ApiClientError;
use super::negotiation::{select_accept, select_content_type, ResponseKind};
use super::param::{self, ParamStyle, ParamValue};

/// Where a declared parameter is injected into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder in the path template.
    Path,
    /// Expanded into query string pairs.
    Query,
}

/// Static description of one declared operation parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name, matching the `{name}` placeholder for path parameters.
    pub name: &'static str,
    /// Where the parameter lands in the request.
    pub location: ParamLocation,
    /// Expansion style for structured query values.
    pub style: ParamStyle,
    /// Whether the operation rejects calls that omit this parameter.
    pub required: bool,
}

/// Where a resolved credential is injected.
#[derive(Debug, Clone, Copy)]
pub enum CredentialPlacement {
    /// Written into a header, overwriting any prior value.
    Header {
        /// Header to set, for example `authorization`.
        name: &'static str,
        /// Prepended verbatim to the resolved value, for example `"Bearer "`.
        prefix: &'static str,
    },
    /// Appended as a query pair, preserving existing values under the key.
    Query {
        /// Query parameter name.
        name: &'static str,
    },
}

/// Links an operation to a credential scheme and its injection point.
#[derive(Debug, Clone, Copy)]
pub struct CredentialSpec {
    /// Scheme name resolved through the [`Configuration`] credential map.
    pub scheme: &'static str,
    /// Where the resolved value is injected.
    pub placement: CredentialPlacement,
}

impl CredentialSpec {
    /// The `oauth2` bearer-token scheme used by every FlowBoard operation.
    pub const OAUTH2_BEARER: Self = Self {
        scheme: super::config::OAUTH2_SCHEME,
        placement: CredentialPlacement::Header {
            name: "authorization",
            prefix: "Bearer ",
        },
    };
}

/// Static description of one API operation.
///
/// Generated service methods each reference one of these; the descriptor is
/// what [`build_request`] interprets to produce a concrete HTTP request.
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    /// HTTP method.
    pub method: Method,
    /// Path template relative to the base path, with `{name}` placeholders.
    pub path: &'static str,
    /// Declared parameters, in declaration order.
    pub params: &'static [ParamSpec],
    /// Media types the request body may be sent as, in declaration order.
    pub produces: &'static [&'static str],
    /// Media types accepted for the response, in declaration order.
    pub accepts: &'static [&'static str],
    /// Credential requirement, if the operation is authenticated.
    pub credentials: Option<CredentialSpec>,
}

/// Runtime arguments for one call: named parameter values plus an optional
/// JSON body.
///
/// Values convert through `Into<ParamValue>`, so call sites pass plain Rust
/// types. Insertion order is preserved and flows through to the query string.
#[derive(Debug, Default)]
pub struct CallArgs {
    values: IndexMap<String, ParamValue>,
    body: Option<serde_json::Value>,
}

impl CallArgs {
    /// Creates an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named parameter value.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets the request body, serialized to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Serialization`] when the body cannot be
    /// represented as JSON.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }
}

/// A fully assembled request, ready for the transport.
#[derive(Debug)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL with encoded path and query.
    pub url: Url,
    /// Headers, including negotiated media types and injected credentials.
    pub headers: HeaderMap,
    /// Serialized request body, if any.
    pub body: Option<Bytes>,
    /// How the response body should be decoded.
    pub response_kind: ResponseKind,
}

/// Assembles a concrete request from an endpoint descriptor and call arguments.
///
/// Processing order is fixed: required parameters are validated first so a
/// missing one fails before any credential is resolved or network activity
/// happens, then credentials are injected, media types negotiated, the path
/// template expanded, and finally query parameters serialized.
///
/// # Errors
///
/// - [`ApiClientError::MissingParameter`] when a required parameter is absent
///   or null.
/// - [`ApiClientError::Encoding`] when a path parameter is not a scalar.
/// - [`ApiClientError::Url`] when base path and template do not form a URL.
pub fn build_request(
    spec: &EndpointSpec,
    args: &CallArgs,
    config: &Configuration,
) -> Result<RequestDescriptor, ApiClientError> {
    for param in spec.params {
        if param.required {
            let missing = match args.get(param.name) {
                None | Some(ParamValue::Null) => true,
                Some(_) => false,
            };
            if missing {
                return Err(ApiClientError::missing_parameter(param.name));
            }
        }
    }

    let mut headers = HeaderMap::new();
    let mut query: Vec<(String, String)> = Vec::new();

    if let Some(credential) = &spec.credentials {
        match credential.placement {
            CredentialPlacement::Header { name, prefix } => {
                let header_name: HeaderName = name.parse()?;
                config.apply_to_header(credential.scheme, header_name, &mut headers, Some(prefix))?;
            }
            CredentialPlacement::Query { name } => {
                config.apply_to_query(credential.scheme, name, &mut query);
            }
        }
    }

    let accept = select_accept(spec.accepts);
    if let Some(accept) = accept {
        headers.insert(ACCEPT, HeaderValue::from_str(accept)?);
    }
    let body = match &args.body {
        Some(json) => {
            if let Some(content_type) = select_content_type(spec.produces) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
            }
            Some(Bytes::from(serde_json::to_vec(json)?))
        }
        None => None,
    };

    let codec = config.codec();
    let mut path = spec.path.to_string();
    for param in spec.params {
        if param.location != ParamLocation::Path {
            continue;
        }
        let placeholder = format!("{{{}}}", param.name);
        let Some(value) = args.get(param.name) else {
            // optional path parameters do not exist in practice, but a
            // descriptor could declare one
            continue;
        };
        let segment = path_segment(param.name, value)?;
        path = path.replace(&placeholder, &codec.encode_value(&segment));
    }
    if path.contains('{') {
        warn!(path, "path template still contains unresolved placeholders");
    }

    for param in spec.params {
        if param.location != ParamLocation::Query {
            continue;
        }
        if let Some(value) = args.get(param.name) {
            let deep = param.style == ParamStyle::DeepObject;
            query.extend(param::serialize(value, Some(param.name), deep)?);
        }
    }

    let base = config.base_path_or_seed(DEFAULT_BASE_PATH);
    let mut url = Url::parse(&format!("{base}{path}"))?;
    if !query.is_empty() {
        let encoded = query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", codec.encode_key(key), codec.encode_value(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&encoded));
    }

    debug!(method = %spec.method, url = %url, "built request");

    Ok(RequestDescriptor {
        method: spec.method.clone(),
        url,
        headers,
        body,
        response_kind: ResponseKind::from_accept(accept),
    })
}

/// Renders a path parameter as a single segment string.
fn path_segment(name: &str, value: &ParamValue) -> Result<String, ApiClientError> {
    let pairs = param::serialize(value, Some(name), false)?;
    match pairs.as_slice() {
        [(_, single)] => Ok(single.clone()),
        _ => Err(ApiClientError::encoding(format!(
            "path parameter '{name}' must serialize to exactly one value"
        ))),
    }
}
