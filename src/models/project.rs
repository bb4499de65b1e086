use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

/// Named boolean capabilities carried on a project membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberFlag {
    CanManageMilestones,
    CanViewReports,
}

impl MemberFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberFlag::CanManageMilestones => "can_manage_milestones",
            MemberFlag::CanViewReports => "can_view_reports",
        }
    }
}

/// Membership pivot row between a project and a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub user_id: Uuid,
    #[serde(default)]
    pub can_manage_milestones: bool,
    #[serde(default)]
    pub can_view_reports: bool,
}

impl ProjectMember {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            can_manage_milestones: false,
            can_view_reports: false,
        }
    }

    pub fn with_flag(mut self, flag: MemberFlag) -> Self {
        match flag {
            MemberFlag::CanManageMilestones => self.can_manage_milestones = true,
            MemberFlag::CanViewReports => self.can_view_reports = true,
        }
        self
    }

    pub fn has_flag(&self, flag: MemberFlag) -> bool {
        match flag {
            MemberFlag::CanManageMilestones => self.can_manage_milestones,
            MemberFlag::CanViewReports => self.can_view_reports,
        }
    }
}

pub(crate) fn find_member(members: &[ProjectMember], user_id: Uuid) -> Option<&ProjectMember> {
    members.iter().find(|m| m.user_id == user_id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub manager_id: Option<Uuid>,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl ProjectSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_manager(mut self, manager_id: Uuid) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn with_member(mut self, member: ProjectMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}
