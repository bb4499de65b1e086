use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::{ProjectMember, ProjectSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Cancelled => "cancelled",
        }
    }
}

/// A milestone together with the parent project data its rules depend on.
///
/// The parent manager and membership rows are copied in by the loader so that
/// a decision never has to reach back into storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub project_manager_id: Option<Uuid>,
    #[serde(default)]
    pub assigned_to_id: Option<Uuid>,
    #[serde(default)]
    pub project_members: Vec<ProjectMember>,
    #[serde(default)]
    pub status: Option<MilestoneStatus>,
}

impl MilestoneSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Copies the parent project's manager and membership rows.
    pub fn in_project(mut self, project: &ProjectSnapshot) -> Self {
        self.project_id = project.id;
        self.project_manager_id = project.manager_id;
        self.project_members = project.members.clone();
        self
    }

    pub fn assigned_to(mut self, user_id: Uuid) -> Self {
        self.assigned_to_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: MilestoneStatus) -> Self {
        self.status = Some(status);
        self
    }
}
