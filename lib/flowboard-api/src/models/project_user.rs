use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Maintainer,
    Editor,
    Member,
    Reporter,
}

/// Membership of a user in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserDto {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<UserRole>,
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<NaiveDate>,
}

/// Payload for `POST /project-users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserCreateRequest {
    pub project_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
}

/// Payload for `PUT /project-users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
}
