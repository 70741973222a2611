use std::fmt;
use std::sync::{Arc, OnceLock};

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use indexmap::IndexMap;

use super::codec::{ParameterCodec, PercentCodec};
use super::credentials::CredentialSource;
use super::error::ApiClientError;

/// Base path used when neither the builder nor the first call site provides one.
pub(crate) const DEFAULT_BASE_PATH: &str = "http://localhost:8080";

/// The credential scheme pre-registered from the caller-supplied access token.
pub const OAUTH2_SCHEME: &str = "oauth2";

/// Per-client configuration: base path, credential sources and parameter codec.
///
/// Created once per [`ApiClient`](super::ApiClient) and shared read-only across
/// concurrent calls. The base path is the only lazily-filled field: when the
/// builder leaves it unset, the first dispatched call seeds it with the
/// client's default, after which it never changes.
///
/// The `oauth2` scheme resolves through the access token supplied with
/// [`with_access_token`](Self::with_access_token) unless the caller registers
/// an explicit `oauth2` source, enabling just-in-time token refresh when the
/// token is provider-backed.
pub struct Configuration {
    base_path: OnceLock<String>,
    with_credentials: bool,
    credentials: IndexMap<String, CredentialSource>,
    access_token: Option<CredentialSource>,
    codec: Arc<dyn ParameterCodec>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: OnceLock::new(),
            with_credentials: false,
            credentials: IndexMap::new(),
            access_token: None,
            codec: Arc::new(PercentCodec),
        }
    }
}

impl Configuration {
    /// Creates an empty configuration with the default percent codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path every request URL is resolved against.
    pub fn with_base_path(self, base_path: impl Into<String>) -> Self {
        // OnceLock::set only fails when already seeded, which a fresh builder
        // chain cannot reach
        let _ = self.base_path.set(base_path.into());
        self
    }

    /// Sets the access token backing the default `oauth2` scheme.
    ///
    /// Accepts a literal value or a provider closure via
    /// [`CredentialSource::from_provider`].
    pub fn with_access_token(mut self, token: impl Into<CredentialSource>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Registers a credential source under a scheme name.
    ///
    /// Registering `oauth2` overrides the access-token-backed default.
    pub fn with_credential(mut self, scheme: impl Into<String>, source: CredentialSource) -> Self {
        self.credentials.insert(scheme.into(), source);
        self
    }

    /// Asks the transport to include ambient credentials (cookies) in requests.
    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = with_credentials;
        self
    }

    /// Replaces the parameter codec.
    pub fn with_codec(mut self, codec: impl ParameterCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// The configured base path, if it has been seeded yet.
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.get().map(String::as_str)
    }

    /// The base path, seeding it from `fallback` on first use.
    pub(crate) fn base_path_or_seed(&self, fallback: &str) -> &str {
        self.base_path.get_or_init(|| fallback.to_string())
    }

    /// Whether ambient transport credentials are requested.
    pub fn send_ambient_credentials(&self) -> bool {
        self.with_credentials
    }

    /// The active parameter codec.
    pub fn codec(&self) -> &dyn ParameterCodec {
        self.codec.as_ref()
    }

    /// Resolves a credential scheme to its current value.
    ///
    /// Named sources win; the `oauth2` scheme falls back to the pre-registered
    /// access token. Provider-backed sources are invoked on every call.
    pub fn resolve_credential(&self, scheme: &str) -> Option<String> {
        if let Some(source) = self.credentials.get(scheme) {
            return source.resolve();
        }
        if scheme == OAUTH2_SCHEME {
            return self.access_token.as_ref().and_then(CredentialSource::resolve);
        }
        None
    }

    /// Injects a resolved credential into a header, overwriting any prior value.
    ///
    /// Leaves the map untouched when the scheme resolves to nothing. The
    /// prefix (for example `"Bearer "`) defaults to empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidHeaderValue`] when the prefixed value
    /// contains characters that are not legal in an HTTP header.
    pub fn apply_to_header(
        &self,
        scheme: &str,
        header_name: HeaderName,
        headers: &mut HeaderMap,
        prefix: Option<&str>,
    ) -> Result<(), ApiClientError> {
        let Some(value) = self.resolve_credential(scheme) else {
            return Ok(());
        };
        let prefixed = format!("{}{value}", prefix.unwrap_or_default());
        headers.insert(header_name, HeaderValue::from_str(&prefixed)?);
        Ok(())
    }

    /// Appends a resolved credential to a query pair list.
    ///
    /// Unlike [`apply_to_header`](Self::apply_to_header) this appends, so
    /// earlier values under the same key are preserved.
    pub fn apply_to_query(
        &self,
        scheme: &str,
        param_name: &str,
        query: &mut Vec<(String, String)>,
    ) {
        if let Some(value) = self.resolve_credential(scheme) {
            query.push((param_name.to_string(), value));
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Configuration")
            .field("base_path", &self.base_path.get())
            .field("with_credentials", &self.with_credentials)
            .field("credentials", &self.credentials)
            .field("access_token", &self.access_token)
            .field("codec", &self.codec)
            .finish()
    }
}
