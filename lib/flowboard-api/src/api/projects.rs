use http::Method;
use uuid::Uuid;

use super::{ACCEPT_JSON, ACCEPT_JSON_ANY, ID_PARAM, PRODUCES_JSON};
use crate::client::{ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec};
use crate::models::{ProjectCreateRequest, ProjectDto, ProjectUpdateRequest};

/// Project endpoints under `/projects`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsApi<'c> {
    client: &'c ApiClient,
}

impl<'c> ProjectsApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /projects`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_project(
        &self,
        request: &ProjectCreateRequest,
    ) -> Result<Call<ProjectDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/projects",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_all_projects(&self) -> Result<Call<Vec<ProjectDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/projects",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `GET /projects/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_project_by_id(&self, id: Uuid) -> Result<Call<ProjectDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/projects/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `PUT /projects/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn update_project(
        &self,
        id: Uuid,
        request: &ProjectUpdateRequest,
    ) -> Result<Call<ProjectDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PUT,
            path: "/projects/{id}",
            params: &[ID_PARAM],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("id", id).json_body(request)?)
    }

    /// `DELETE /projects/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn delete_project(&self, id: Uuid) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::DELETE,
            path: "/projects/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `GET /projects/count`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_project_count(&self) -> Result<Call<i64>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/projects/count",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }
}
