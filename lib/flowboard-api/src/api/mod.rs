//! Endpoint groups, one per server controller.
//!
//! Each service borrows the [`ApiClient`](crate::client::ApiClient) and turns
//! a method call into a [`Call`](crate::client::Call) handle. Validation
//! happens while the handle is created; the network is only touched when the
//! handle is awaited.

mod auth;
mod project_users;
mod projects;
mod reports;
mod tasks;
mod time_logs;
mod users;

pub use self::auth::AuthApi;
pub use self::project_users::ProjectUsersApi;
pub use self::projects::ProjectsApi;
pub use self::reports::ReportsApi;
pub use self::tasks::TasksApi;
pub use self::time_logs::TimeLogsApi;
pub use self::users::UsersApi;

use crate::client::{ParamLocation, ParamSpec, ParamStyle};

/// Accept list for collection and count endpoints.
pub(crate) const ACCEPT_JSON: &[&str] = &["application/json"];

/// Accept list for single-resource and mutation endpoints.
pub(crate) const ACCEPT_JSON_ANY: &[&str] = &["application/json", "*/*"];

/// Media types request bodies are written as.
pub(crate) const PRODUCES_JSON: &[&str] = &["application/json"];

/// The ubiquitous `{id}` path parameter.
pub(crate) const ID_PARAM: ParamSpec = ParamSpec {
    name: "id",
    location: ParamLocation::Path,
    style: ParamStyle::Simple,
    required: true,
};
