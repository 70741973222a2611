use http::Method;
use uuid::Uuid;

use super::{ACCEPT_JSON, ACCEPT_JSON_ANY, ID_PARAM, PRODUCES_JSON};
use crate::client::{ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec};
use crate::models::{TimeLogDto, TimeLogRequest};

/// Time log endpoints under `/time-logs`.
#[derive(Debug, Clone, Copy)]
pub struct TimeLogsApi<'c> {
    client: &'c ApiClient,
}

impl<'c> TimeLogsApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /time-logs`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_time_log(
        &self,
        request: &TimeLogRequest,
    ) -> Result<Call<TimeLogDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/time-logs",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /time-logs`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_all_time_logs(&self) -> Result<Call<Vec<TimeLogDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/time-logs",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `GET /time-logs/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_time_log_by_id(&self, id: Uuid) -> Result<Call<TimeLogDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/time-logs/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `PUT /time-logs/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn update_time_log(
        &self,
        id: Uuid,
        request: &TimeLogRequest,
    ) -> Result<Call<TimeLogDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PUT,
            path: "/time-logs/{id}",
            params: &[ID_PARAM],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("id", id).json_body(request)?)
    }

    /// `DELETE /time-logs/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn delete_time_log(&self, id: Uuid) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::DELETE,
            path: "/time-logs/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `GET /time-logs/count`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_time_log_count(&self) -> Result<Call<i64>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/time-logs/count",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }
}
