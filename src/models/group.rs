use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Public,
    Private,
    Restricted,
}

impl GroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Public => "public",
            GroupType::Private => "private",
            GroupType::Restricted => "restricted",
        }
    }
}

/// Per-member role inside a group, independent of the global `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    Admin,
    Moderator,
    Member,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Admin => "admin",
            GroupRole::Moderator => "moderator",
            GroupRole::Member => "member",
        }
    }
}

impl std::fmt::Display for GroupRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub user_id: Uuid,
    #[serde(default = "default_group_role")]
    pub role: GroupRole,
}

fn default_group_role() -> GroupRole {
    GroupRole::Member
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub created_by_id: Option<Uuid>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default, rename = "type")]
    pub group_type: Option<GroupType>,
}

impl GroupSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn created_by(mut self, user_id: Uuid) -> Self {
        self.created_by_id = Some(user_id);
        self
    }

    pub fn with_member(mut self, user_id: Uuid, role: GroupRole) -> Self {
        self.members.push(GroupMember { user_id, role });
        self
    }

    pub fn with_type(mut self, group_type: GroupType) -> Self {
        self.group_type = Some(group_type);
        self
    }

    pub fn member_role(&self, user_id: Uuid) -> Option<GroupRole> {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .map(|m| m.role)
    }
}
