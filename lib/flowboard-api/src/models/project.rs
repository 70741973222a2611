use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Active,
    Archived,
    Completed,
}

/// Billing model of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    TimeBased,
    StoryPointBased,
}

/// Customer or contractor company details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Maps a story point count to its estimated duration, for story-point-based
/// projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPointTimeMappingDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Between 1 and 100.
    pub story_points: Option<i32>,
    /// ISO-8601 duration, for example `PT4H`.
    pub time_value: Option<String>,
}

/// A project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub story_point_fee: Option<f64>,
    pub story_point_time_mappings: Option<Vec<StoryPointTimeMappingDto>>,
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<NaiveDateTime>,
    pub customer: Option<CompanyDto>,
    pub contractor: Option<CompanyDto>,
}

/// Payload for `POST /projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_point_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_point_time_mappings: Option<Vec<StoryPointTimeMappingDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CompanyDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<CompanyDto>,
}

/// Payload for `PUT /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_point_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_point_time_mappings: Option<Vec<StoryPointTimeMappingDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CompanyDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<CompanyDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_field_is_named_type_on_the_wire() {
        let json = serde_json::json!({
            "id": "7e2f6f3a-0000-4000-8000-000000000009",
            "name": "Website revamp",
            "status": "ACTIVE",
            "type": "STORY_POINT_BASED",
            "storyPointFee": 120.0,
            "storyPointTimeMappings": [
                {"storyPoints": 1, "timeValue": "PT2H"}
            ],
            "createdBy": "admin",
            "createdAt": "2025-01-05T09:30:00",
            "lastModifiedBy": null,
            "lastModifiedAt": null,
            "customer": {"name": "Acme", "address": "1 Main St"},
            "contractor": null
        });

        let project: ProjectDto = serde_json::from_value(json).expect("decode");
        assert_eq!(project.project_type, Some(ProjectType::StoryPointBased));
        assert_eq!(project.status, Some(ProjectStatus::Active));
        let mappings = project.story_point_time_mappings.expect("mappings");
        assert_eq!(mappings[0].time_value.as_deref(), Some("PT2H"));
    }
}
