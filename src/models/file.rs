use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Public,
    Internal,
    Restricted,
    Confidential,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Internal => "internal",
            AccessLevel::Restricted => "restricted",
            AccessLevel::Confidential => "confidential",
        }
    }
}

/// An uploaded file. `access_level` plays the role of the lifecycle status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub uploaded_by_id: Option<Uuid>,
    #[serde(default)]
    pub access_level: Option<AccessLevel>,
}

impl FileSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn uploaded_by(mut self, user_id: Uuid) -> Self {
        self.uploaded_by_id = Some(user_id);
        self
    }

    pub fn with_access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = Some(level);
        self
    }
}
