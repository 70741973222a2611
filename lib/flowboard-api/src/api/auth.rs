use http::Method;

use super::ACCEPT_JSON;
use crate::client::{ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec};

/// Authentication endpoints under `/auth`.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'c> {
    client: &'c ApiClient,
}

impl<'c> AuthApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `GET /auth/user` — claims of the authenticated principal.
    ///
    /// The shape depends on the identity provider, so the body is left as
    /// loose JSON.
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_current_user(&self) -> Result<Call<serde_json::Value>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/auth/user",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }
}
