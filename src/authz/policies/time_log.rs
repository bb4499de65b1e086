use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{ApprovalState, ResourceKind, Status};

const UNAPPROVED: &[Status] = &[Status::TimeLog(ApprovalState::Pending)];

// Owner is the author of the log; ParentOwner manages its project.
pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::TimeLog)
        .allow_any(VIEW, [is(Admin), is(Owner), is(ParentOwner)])
        .allow(UPDATE, Clause::of([is(Admin)]))
        .allow(UPDATE, Clause::of([is(Owner), is(InStatus(UNAPPROVED))]))
        .allow(DELETE, Clause::of([is(Admin)]))
        .allow(DELETE, Clause::of([is(Owner), is(InStatus(UNAPPROVED))]))
        // never the log's own author
        .allow(APPROVE, Clause::of([is(Admin), not(Owner)]))
        .allow(APPROVE, Clause::of([is(ParentOwner), not(Owner)]));

    super::with_common_gates(builder).build()
}
