use std::collections::HashMap;

use crate::errors::PolicyError;
use crate::models::ResourceKind;

use super::policies;
use super::policy::Policy;

/// Resource kind key -> policy table.
///
/// Assembled once at start-up and shared read-only (typically behind an
/// `Arc`). There is no way to change a table after construction.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    policies: HashMap<&'static str, Policy>,
}

impl PolicyRegistry {
    /// Tables for every resource kind of the application.
    pub fn standard() -> Result<Self, PolicyError> {
        Self::from_policies([
            policies::project::policy()?,
            policies::evidence::policy()?,
            policies::file::policy()?,
            policies::group::policy()?,
            policies::message::policy()?,
            policies::milestone::policy()?,
            policies::time_log::policy()?,
            policies::user::policy()?,
        ])
    }

    pub fn from_policies(policies: impl IntoIterator<Item = Policy>) -> Result<Self, PolicyError> {
        let mut map = HashMap::new();
        for policy in policies {
            let kind = policy.kind();
            if map.insert(kind.as_str(), policy).is_some() {
                return Err(PolicyError::DuplicateKind(kind));
            }
        }
        Ok(Self { policies: map })
    }

    pub fn get(&self, kind: &str) -> Option<&Policy> {
        self.policies.get(kind)
    }

    pub fn kinds(&self) -> Vec<ResourceKind> {
        let mut kinds: Vec<ResourceKind> = self.policies.values().map(Policy::kind).collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
