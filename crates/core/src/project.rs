//! Project and secret entities plus their input DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// Optional campaign window of a project. Start and end are independently
/// nullable; progress math is only defined when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// The shareable goal entity. `id` is public and viewable by anyone;
/// mutation rights come only from the associated [`Secret`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<TimeFrame>,
    /// The goal count of leads, distinct from the lead collection itself.
    #[serde(rename = "leads")]
    pub leads_goal: i64,
}

impl Project {
    /// Assemble a full entity from a storage-assigned id and accepted input.
    pub fn from_data(id: EntityId, data: ProjectData) -> Self {
        Self {
            id,
            name: data.name,
            time_frame: data.time_frame,
            leads_goal: data.leads_goal,
        }
    }
}

/// Input shape for creating or fully replacing a project. A provided
/// `time_frame` replaces the stored one wholesale; it is never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    #[validate(length(min = 1, message = "project name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<TimeFrame>,
    #[validate(range(min = 0, message = "lead goal must not be negative"))]
    #[serde(rename = "leads")]
    pub leads_goal: i64,
}

/// Bearer capability granting mutation rights over exactly one project.
///
/// Minted atomically with project creation and deleted with the project;
/// a secret whose project no longer exists authorizes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub id: EntityId,
    pub project_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn project_serializes_goal_under_the_leads_key() {
        let project = Project {
            id: Uuid::new_v4(),
            name: "Q1 Outreach".into(),
            time_frame: None,
            leads_goal: 10,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["leads"], 10);
        assert!(json.get("leadsGoal").is_none());
        assert!(json.get("timeFrame").is_none());
    }

    #[test]
    fn time_frame_fields_are_independently_nullable() {
        let json = serde_json::json!({
            "name": "Q1 Outreach",
            "leads": 3,
            "timeFrame": { "start": "2026-01-01T00:00:00Z", "end": null }
        });
        let data: ProjectData = serde_json::from_value(json).unwrap();
        let frame = data.time_frame.unwrap();
        assert!(frame.start.is_some());
        assert!(frame.end.is_none());
    }
}
