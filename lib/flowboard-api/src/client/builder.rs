use std::sync::Arc;

use super::codec::ParameterCodec;
use super::config::Configuration;
use super::credentials::CredentialSource;
use super::error::ApiClientError;
use super::transport::Transport;
use super::ApiClient;

/// Fluent builder for [`ApiClient`].
///
/// Every setter consumes and returns the builder, so configuration reads as a
/// single chain:
///
/// ```rust,no_run
/// use flowboard_api::ApiClient;
///
/// # fn main() -> Result<(), flowboard_api::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_base_path("https://flowboard.example.com/api")
///     .with_access_token("eyJhbGciOi...")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    config: Configuration,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    /// Sets the base path requests are resolved against.
    ///
    /// When unset, the first dispatched call falls back to the local
    /// development server, `http://localhost:8080`.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config = self.config.with_base_path(base_path);
        self
    }

    /// Sets a fixed access token for the `oauth2` scheme.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.config = self
            .config
            .with_access_token(CredentialSource::from_value(token.into()));
        self
    }

    /// Sets a provider invoked on every call to fetch the current access
    /// token, for tokens that rotate at runtime.
    #[must_use]
    pub fn with_access_token_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.config = self
            .config
            .with_access_token(CredentialSource::from_provider(provider));
        self
    }

    /// Registers a credential source under a scheme name.
    #[must_use]
    pub fn with_credential(
        mut self,
        scheme: impl Into<String>,
        source: CredentialSource,
    ) -> Self {
        self.config = self.config.with_credential(scheme, source);
        self
    }

    /// Replaces the parameter codec used for path and query encoding.
    #[must_use]
    pub fn with_codec(mut self, codec: impl ParameterCodec + 'static) -> Self {
        self.config = self.config.with_codec(codec);
        self
    }

    /// Asks the transport to attach ambient credentials such as cookies.
    #[must_use]
    pub fn with_ambient_credentials(mut self, enabled: bool) -> Self {
        self.config = self.config.with_credentials(enabled);
        self
    }

    /// Replaces the transport, e.g. with a recording one in tests.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Transport`] when no transport was supplied
    /// and the default HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(reqwest::Client::builder().build()?),
        };
        Ok(ApiClient::new(transport, Arc::new(self.config)))
    }
}
