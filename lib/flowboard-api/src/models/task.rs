use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
    Canceled,
}

/// A task on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub assign_to: Option<String>,
    /// Time already booked, as an ISO-8601 duration such as `PT2H30M`.
    pub booked_time: Option<String>,
    /// Estimated effort, as an ISO-8601 duration.
    pub estimated_time: Option<String>,
    pub story_points: Option<i32>,
    pub status: Option<TaskStatus>,
    pub created_by: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<NaiveDate>,
}

/// Payload for `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateRequest {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_point_mapping_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Payload for `PUT /tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<String>,
    /// New estimate, as an ISO-8601 duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_round_trips_through_the_wire_shape() {
        let json = serde_json::json!({
            "id": "7e2f6f3a-0000-4000-8000-000000000001",
            "name": "Implement login",
            "description": null,
            "projectId": "7e2f6f3a-0000-4000-8000-000000000002",
            "assignTo": "jane",
            "bookedTime": "PT3H",
            "estimatedTime": "PT8H",
            "storyPoints": 5,
            "status": "IN_PROGRESS",
            "createdBy": "admin",
            "createdAt": "2025-03-14",
            "lastModifiedBy": null,
            "lastModifiedAt": null
        });

        let task: TaskDto = serde_json::from_value(json.clone()).expect("decode");
        assert_eq!(task.status, Some(TaskStatus::InProgress));
        assert_eq!(task.estimated_time.as_deref(), Some("PT8H"));
        assert_eq!(
            task.created_at,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(serde_json::to_value(&task).expect("encode"), json);
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let request = TaskCreateRequest {
            name: Some("Write docs".to_string()),
            project_id: Some(Uuid::nil()),
            ..TaskCreateRequest::default()
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Write docs",
                "projectId": "00000000-0000-0000-0000-000000000000"
            })
        );
    }

    #[test]
    fn statuses_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(TaskStatus::Canceled).expect("encode"),
            serde_json::json!("CANCELED")
        );
    }
}
