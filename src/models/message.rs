use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSnapshot {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub sender_id: Option<Uuid>,
    #[serde(default)]
    pub recipient_ids: Vec<Uuid>,
}

impl MessageSnapshot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn sent_by(mut self, user_id: Uuid) -> Self {
        self.sender_id = Some(user_id);
        self
    }

    pub fn to(mut self, recipient_id: Uuid) -> Self {
        self.recipient_ids.push(recipient_id);
        self
    }
}
