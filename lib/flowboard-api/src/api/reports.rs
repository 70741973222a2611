use http::Method;
use uuid::Uuid;

use super::{ACCEPT_JSON, ACCEPT_JSON_ANY, ID_PARAM, PRODUCES_JSON};
use crate::client::{
    ApiClient, ApiClientError, Call, CallArgs, CredentialSpec, EndpointSpec, ParamLocation,
    ParamSpec, ParamStyle,
};
use crate::models::{
    CreateCocReportRequest, CreateEmployeeMatrixReportRequest,
    CreateProjectActivityReportRequest, DownloadReportDto, ReportCreateRequest, ReportDto,
    ReportUpdateRequest,
};

const REPORT_ID_PARAM: ParamSpec = ParamSpec {
    name: "reportId",
    location: ParamLocation::Path,
    style: ParamStyle::Simple,
    required: true,
};

/// Report endpoints under `/reports`.
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'c> {
    client: &'c ApiClient,
}

impl<'c> ReportsApi<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> Self {
        Self { client }
    }

    /// `POST /reports`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_report(
        &self,
        request: &ReportCreateRequest,
    ) -> Result<Call<ReportDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/reports",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /reports`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_all_reports(&self) -> Result<Call<Vec<ReportDto>>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/reports",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `GET /reports/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_report_by_id(&self, id: Uuid) -> Result<Call<ReportDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/reports/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `PUT /reports/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn update_report(
        &self,
        id: Uuid,
        request: &ReportUpdateRequest,
    ) -> Result<Call<ReportDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PUT,
            path: "/reports/{id}",
            params: &[ID_PARAM],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("id", id).json_body(request)?)
    }

    /// `DELETE /reports/{id}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn delete_report(&self, id: Uuid) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::DELETE,
            path: "/reports/{id}",
            params: &[ID_PARAM],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().arg("id", id))
    }

    /// `GET /reports/count`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_report_count(&self) -> Result<Call<i64>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/reports/count",
            params: &[],
            produces: &[],
            accepts: ACCEPT_JSON,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new())
    }

    /// `POST /reports/coc` — renders a certificate of completion; returns the
    /// id of the stored report.
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_coc_report(
        &self,
        request: &CreateCocReportRequest,
    ) -> Result<Call<Uuid>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/reports/coc",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `POST /reports/employee-matrix`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_employee_matrix_report(
        &self,
        request: &CreateEmployeeMatrixReportRequest,
    ) -> Result<Call<Uuid>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/reports/employee-matrix",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `POST /reports/project-activity`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn create_project_activity_report(
        &self,
        request: &CreateProjectActivityReportRequest,
    ) -> Result<Call<Uuid>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::POST,
            path: "/reports/project-activity",
            params: &[],
            produces: PRODUCES_JSON,
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(&SPEC, CallArgs::new().json_body(request)?)
    }

    /// `GET /reports/{reportId}/download` — pre-signed download location for
    /// a rendered report.
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn get_report_download_url(
        &self,
        report_id: Uuid,
    ) -> Result<Call<DownloadReportDto>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::GET,
            path: "/reports/{reportId}/download",
            params: &[REPORT_ID_PARAM],
            produces: &[],
            accepts: ACCEPT_JSON_ANY,
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client
            .call(&SPEC, CallArgs::new().arg("reportId", report_id))
    }

    /// `PATCH /reports/{reportId}/rename/{name}`
    ///
    /// # Errors
    ///
    /// Fails synchronously when the request cannot be assembled.
    pub fn rename_report(
        &self,
        report_id: Uuid,
        name: &str,
    ) -> Result<Call<()>, ApiClientError> {
        const SPEC: EndpointSpec = EndpointSpec {
            method: Method::PATCH,
            path: "/reports/{reportId}/rename/{name}",
            params: &[
                REPORT_ID_PARAM,
                ParamSpec {
                    name: "name",
                    location: ParamLocation::Path,
                    style: ParamStyle::Simple,
                    required: true,
                },
            ],
            produces: &[],
            accepts: &[],
            credentials: Some(CredentialSpec::OAUTH2_BEARER),
        };
        self.client.call(
            &SPEC,
            CallArgs::new().arg("reportId", report_id).arg("name", name),
        )
    }
}
