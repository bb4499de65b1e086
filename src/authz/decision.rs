use serde::Serialize;

/// Why a request was denied. For internal logging only, never shown to the
/// end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    UnknownResourceKind,
    UnknownAction,
    ResourceKindMismatch,
    NoMatchingRule,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::UnknownResourceKind => "unknown_resource_kind",
            ReasonCode::UnknownAction => "unknown_action",
            ReasonCode::ResourceKindMismatch => "resource_kind_mismatch",
            ReasonCode::NoMatchingRule => "no_matching_rule",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one authorization call.
///
/// Valid only for the snapshot it was computed from; created fresh per call
/// and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Decision {
    pub allowed: bool,
    pub reason: Option<ReasonCode>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: ReasonCode) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
