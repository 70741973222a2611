use http::Method;
use uuid::Uuid;

use super::{ACCEPT_JSON, ACCEPT_JSON_ANY, ID_PARAM, PRODUCES_JSON};
use crate::client::{
    ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec, ParamLocation,
    ParamSpec, ParamStyle,
};
use crate::models::{TaskCreateRequest, TaskDto, TaskUpdateRequest};

/// Task endpoints under `/tasks`.
#[derive(Debug, Clone, Copy)]
pub struct TasksApi<'c> {
    client: &'c ApiClient,
}

impl<'c> TasksApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_task(
        &self,
        request: &TaskCreateRequest,
    ) -> Result<Call<TaskDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/tasks",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /tasks`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_all_tasks(&self) -> Result<Call<Vec<TaskDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/tasks",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `GET /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_task_by_id(&self, id: Uuid) -> Result<Call<TaskDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/tasks/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `GET /tasks/project/{projectId}` — tasks belonging to one project.
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_tasks_by_project(
        &self,
        project_id: Uuid,
    ) -> Result<Call<Vec<TaskDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/tasks/project/{projectId}",
            params: &[ParamSpec {
                name: "projectId",
                location: ParamLocation::Path,
                style: ParamStyle::Simple,
                required: true,
            }],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("projectId", project_id))
    }

    /// `PUT /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn update_task(
        &self,
        id: Uuid,
        request: &TaskUpdateRequest,
    ) -> Result<Call<TaskDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PUT,
            path: "/tasks/{id}",
            params: &[ID_PARAM],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("id", id).json_body(request)?)
    }

    /// `DELETE /tasks/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn delete_task(&self, id: Uuid) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::DELETE,
            path: "/tasks/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }
}
