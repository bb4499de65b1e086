//! Authorization module - rule primitives, policy tables and evaluator
//!
//! Every decision is computed from three inputs supplied by the caller:
//! - the acting user (`Actor`)
//! - the resource kind and action name
//! - a read-only snapshot of the targeted resource (`Resource`)
//!
//! Policies are allow-lists. An action is allowed when any of its clauses
//! holds, and everything else is denied, including unknown kinds and actions.

mod actor;
mod clause;
mod decision;
mod evaluator;
pub mod policies;
mod policy;
pub mod primitives;
mod registry;

pub use actor::Actor;
pub use clause::{is, not, Clause, Literal};
pub use decision::{Decision, ReasonCode};
pub use evaluator::PolicyEvaluator;
pub use policy::{Policy, PolicyBuilder};
pub use primitives::Predicate;
pub use registry::PolicyRegistry;

use crate::errors::{AppError, AppResult};
use crate::models::Resource;

/// Evaluate one request against `evaluator`.
pub fn authorize<E: PolicyEvaluator + ?Sized>(
    evaluator: &E,
    actor: &Actor,
    kind: &str,
    action: &str,
    resource: &Resource,
) -> Decision {
    evaluator.authorize(actor, kind, action, resource)
}

/// Like [`authorize`], but a denial becomes `AppError::Forbidden`.
pub fn enforce<E: PolicyEvaluator + ?Sized>(
    evaluator: &E,
    actor: &Actor,
    kind: &str,
    action: &str,
    resource: &Resource,
) -> AppResult<()> {
    let decision = evaluator.authorize(actor, kind, action, resource);
    if decision.is_allowed() {
        return Ok(());
    }

    tracing::warn!(
        actor_id = %actor.id,
        kind = %kind,
        action = %action,
        reason = decision.reason.map(|r| r.as_str()).unwrap_or("none"),
        "request forbidden"
    );
    Err(AppError::forbidden())
}

/// Well-known action names
pub mod actions {
    // Shared
    pub const VIEW_ANY: &str = "view_any";
    pub const VIEW: &str = "view";
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const RESTORE: &str = "restore";
    pub const FORCE_DELETE: &str = "force_delete";
    pub const EXPORT: &str = "export";
    pub const DOWNLOAD: &str = "download";
    pub const MANAGE_MEMBERS: &str = "manage_members";
    pub const VIEW_REPORTS: &str = "view_reports";

    // Evidence
    pub const EVALUATE: &str = "evaluate";
    pub const ASSIGN: &str = "assign";
    pub const ARCHIVE: &str = "archive";

    // Group
    pub const JOIN: &str = "join";
    pub const LEAVE: &str = "leave";
    pub const POST: &str = "post";

    // Message
    pub const REPLY: &str = "reply";
    pub const MARK_READ: &str = "mark_read";

    // Milestone
    pub const COMPLETE: &str = "complete";

    // Time log
    pub const APPROVE: &str = "approve";

    // User
    pub const CHANGE_ROLE: &str = "change_role";
    pub const DEACTIVATE: &str = "deactivate";
    pub const IMPERSONATE: &str = "impersonate";
}
