use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged unit of work on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogDto {
    pub id: Option<Uuid>,
    pub task_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    /// ISO-8601 duration, for example `PT1H30M`.
    pub logged_time: Option<String>,
    pub billable: bool,
    pub log_date: Option<NaiveDate>,
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<NaiveDateTime>,
}

/// Payload for `POST /time-logs` and `PUT /time-logs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogRequest {
    pub task_id: Option<Uuid>,
    /// ISO-8601 duration.
    pub logged_time: Option<String>,
    pub log_date: Option<NaiveDate>,
    pub billable: bool,
}
