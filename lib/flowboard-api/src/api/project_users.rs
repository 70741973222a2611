use http::Method;
use uuid::Uuid;

use super::{ACCEPT_JSON, ACCEPT_JSON_ANY, ID_PARAM, PRODUCES_JSON};
use crate::client::{ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec};
use crate::models::{ProjectUserCreateRequest, ProjectUserDto, ProjectUserUpdateRequest};

/// Project membership endpoints under `/project-users`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectUsersApi<'c> {
    client: &'c ApiClient,
}

impl<'c> ProjectUsersApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /project-users`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_project_user(
        &self,
        request: &ProjectUserCreateRequest,
    ) -> Result<Call<ProjectUserDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/project-users",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /project-users`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_all_project_users(&self) -> Result<Call<Vec<ProjectUserDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/project-users",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `GET /project-users/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_project_user_by_id(
        &self,
        id: Uuid,
    ) -> Result<Call<ProjectUserDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/project-users/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `PUT /project-users/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn update_project_user(
        &self,
        id: Uuid,
        request: &ProjectUserUpdateRequest,
    ) -> Result<Call<ProjectUserDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PUT,
            path: "/project-users/{id}",
            params: &[ID_PARAM],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("id", id).json_body(request)?)
    }

    /// `DELETE /project-users/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn delete_project_user(&self, id: Uuid) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::DELETE,
            path: "/project-users/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `GET /project-users/count`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_project_user_count(&self) -> Result<Call<i64>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/project-users/count",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }
}
