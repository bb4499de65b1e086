//! Read-only snapshots of the resources an actor can act upon.
//!
//! Snapshots are loaded by the request layer, including every relationship
//! field a rule might consult. Missing relationships are `None` or empty and
//! never match.

pub mod evidence;
pub mod file;
pub mod group;
pub mod message;
pub mod milestone;
pub mod project;
pub mod time_log;
pub mod user;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use evidence::{EvidenceSnapshot, EvidenceStatus};
pub use file::{AccessLevel, FileSnapshot};
pub use group::{GroupMember, GroupRole, GroupSnapshot, GroupType};
pub use message::MessageSnapshot;
pub use milestone::{MilestoneSnapshot, MilestoneStatus};
pub use project::{MemberFlag, ProjectMember, ProjectSnapshot, ProjectStatus};
pub use time_log::{ApprovalState, TimeLogSnapshot};
pub use user::{AccountState, Role, UserSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Project,
    Evidence,
    File,
    Group,
    Message,
    Milestone,
    TimeLog,
    User,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Project,
        ResourceKind::Evidence,
        ResourceKind::File,
        ResourceKind::Group,
        ResourceKind::Message,
        ResourceKind::Milestone,
        ResourceKind::TimeLog,
        ResourceKind::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Project => "project",
            ResourceKind::Evidence => "evidence",
            ResourceKind::File => "file",
            ResourceKind::Group => "group",
            ResourceKind::Message => "message",
            ResourceKind::Milestone => "milestone",
            ResourceKind::TimeLog => "time_log",
            ResourceKind::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResourceKind(s.to_string()))
    }
}

/// Lifecycle state of any resource kind, compared by `InStatus` rules.
///
/// A status of one kind never equals a status of another, so a rule written
/// for evidence cannot match a project that happens to share a state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Project(ProjectStatus),
    Evidence(EvidenceStatus),
    File(AccessLevel),
    Group(GroupType),
    Milestone(MilestoneStatus),
    TimeLog(ApprovalState),
    User(AccountState),
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Project(s) => s.as_str(),
            Status::Evidence(s) => s.as_str(),
            Status::File(s) => s.as_str(),
            Status::Group(s) => s.as_str(),
            Status::Milestone(s) => s.as_str(),
            Status::TimeLog(s) => s.as_str(),
            Status::User(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resource instance an action targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Project(ProjectSnapshot),
    Evidence(EvidenceSnapshot),
    File(FileSnapshot),
    Group(GroupSnapshot),
    Message(MessageSnapshot),
    Milestone(MilestoneSnapshot),
    TimeLog(TimeLogSnapshot),
    User(UserSnapshot),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Project(_) => ResourceKind::Project,
            Resource::Evidence(_) => ResourceKind::Evidence,
            Resource::File(_) => ResourceKind::File,
            Resource::Group(_) => ResourceKind::Group,
            Resource::Message(_) => ResourceKind::Message,
            Resource::Milestone(_) => ResourceKind::Milestone,
            Resource::TimeLog(_) => ResourceKind::TimeLog,
            Resource::User(_) => ResourceKind::User,
        }
    }

    /// The owner-like field: manager, submitter, uploader, creator, sender or author.
    pub fn owner_id(&self) -> Option<Uuid> {
        match self {
            Resource::Project(p) => p.manager_id,
            Resource::Evidence(e) => e.submitted_by_id,
            Resource::File(f) => f.uploaded_by_id,
            Resource::Group(g) => g.created_by_id,
            Resource::Message(m) => m.sender_id,
            Resource::TimeLog(t) => t.user_id,
            Resource::Milestone(_) | Resource::User(_) => None,
        }
    }

    /// Manager of the parent project for hierarchical resources.
    pub fn parent_owner_id(&self) -> Option<Uuid> {
        match self {
            Resource::Milestone(m) => m.project_manager_id,
            Resource::TimeLog(t) => t.project_manager_id,
            _ => None,
        }
    }

    pub fn assignee_id(&self) -> Option<Uuid> {
        match self {
            Resource::Evidence(e) => e.assigned_to_id,
            Resource::Milestone(m) => m.assigned_to_id,
            _ => None,
        }
    }

    /// Id of the user account when the resource is itself a user.
    pub fn subject_user_id(&self) -> Option<Uuid> {
        match self {
            Resource::User(u) => u.id,
            _ => None,
        }
    }

    pub fn subject_role(&self) -> Option<Role> {
        match self {
            Resource::User(u) => u.role,
            _ => None,
        }
    }

    pub fn has_member(&self, user_id: Uuid) -> bool {
        match self {
            Resource::Project(p) => project::find_member(&p.members, user_id).is_some(),
            Resource::Group(g) => g.members.iter().any(|m| m.user_id == user_id),
            Resource::Message(m) => m.recipient_ids.contains(&user_id),
            Resource::Milestone(m) => project::find_member(&m.project_members, user_id).is_some(),
            _ => false,
        }
    }

    pub fn member_flag(&self, user_id: Uuid, flag: MemberFlag) -> bool {
        let members = match self {
            Resource::Project(p) => &p.members,
            Resource::Milestone(m) => &m.project_members,
            _ => return false,
        };
        project::find_member(members, user_id)
            .map(|m| m.has_flag(flag))
            .unwrap_or(false)
    }

    pub fn member_role(&self, user_id: Uuid) -> Option<GroupRole> {
        match self {
            Resource::Group(g) => g.member_role(user_id),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Resource::Project(p) => p.status.map(Status::Project),
            Resource::Evidence(e) => e.status.map(Status::Evidence),
            Resource::File(f) => f.access_level.map(Status::File),
            Resource::Group(g) => g.group_type.map(Status::Group),
            Resource::Message(_) => None,
            Resource::Milestone(m) => m.status.map(Status::Milestone),
            Resource::TimeLog(t) => Some(Status::TimeLog(t.approval_state())),
            Resource::User(u) => Some(Status::User(u.account_state())),
        }
    }
}

macro_rules! impl_from_snapshot {
    ($($snapshot:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$snapshot> for Resource {
                fn from(value: $snapshot) -> Self {
                    Resource::$variant(value)
                }
            }
        )*
    };
}

impl_from_snapshot! {
    ProjectSnapshot => Project,
    EvidenceSnapshot => Evidence,
    FileSnapshot => File,
    GroupSnapshot => Group,
    MessageSnapshot => Message,
    MilestoneSnapshot => Milestone,
    TimeLogSnapshot => TimeLog,
    UserSnapshot => User,
}
