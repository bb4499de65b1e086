use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    Pending,
    Approved,
}

impl ApprovalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalState::Pending => "pending",
            ApprovalState::Approved => "approved",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Author of the log.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub project_manager_id: Option<Uuid>,
    #[serde(default)]
    pub is_approved: bool,
}

impl TimeLogSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn logged_by(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn in_project(mut self, project_id: Uuid, manager_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self.project_manager_id = Some(manager_id);
        self
    }

    pub fn approved(mut self) -> Self {
        self.is_approved = true;
        self
    }

    pub fn approval_state(&self) -> ApprovalState {
        if self.is_approved {
            ApprovalState::Approved
        } else {
            ApprovalState::Pending
        }
    }
}
