use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Archived,
}

impl EvidenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStatus::Pending => "pending",
            EvidenceStatus::UnderReview => "under_review",
            EvidenceStatus::Approved => "approved",
            EvidenceStatus::Rejected => "rejected",
            EvidenceStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub submitted_by_id: Option<Uuid>,
    #[serde(default)]
    pub assigned_to_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<EvidenceStatus>,
}

impl EvidenceSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn submitted_by(mut self, user_id: Uuid) -> Self {
        self.submitted_by_id = Some(user_id);
        self
    }

    pub fn assigned_to(mut self, user_id: Uuid) -> Self {
        self.assigned_to_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: EvidenceStatus) -> Self {
        self.status = Some(status);
        self
    }
}
