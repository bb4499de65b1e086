use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{EvidenceStatus, ResourceKind, Role, Status};

const PENDING: &[Status] = &[Status::Evidence(EvidenceStatus::Pending)];
const OPEN: &[Status] = &[
    Status::Evidence(EvidenceStatus::Pending),
    Status::Evidence(EvidenceStatus::UnderReview),
];
const EVALUABLE: &[Status] = &[
    Status::Evidence(EvidenceStatus::UnderReview),
    Status::Evidence(EvidenceStatus::Approved),
];
const DECIDED: &[Status] = &[
    Status::Evidence(EvidenceStatus::Approved),
    Status::Evidence(EvidenceStatus::Rejected),
];

const REVIEWERS: &[Role] = &[Role::Analyst, Role::Investigator];

pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::Evidence)
        .allow_any(VIEW, [is(Admin), is(Owner), is(Assignee), is(AnyRole(REVIEWERS))])
        .allow_any(DOWNLOAD, [is(Admin), is(Owner), is(Assignee), is(AnyRole(REVIEWERS))])
        .allow(UPDATE, Clause::of([is(Admin)]))
        .allow(UPDATE, Clause::of([is(Owner), is(InStatus(PENDING))]))
        .allow(UPDATE, Clause::of([is(Assignee)]))
        .allow(UPDATE, Clause::of([is(AnyRole(&[Role::Analyst])), is(InStatus(OPEN))]))
        .allow(DELETE, Clause::of([is(Admin)]))
        .allow(DELETE, Clause::of([is(Owner), is(InStatus(PENDING))]))
        // nobody evaluates their own submission
        .allow(EVALUATE, Clause::of([is(Admin), not(Owner)]))
        .allow(EVALUATE, Clause::of([is(AnyRole(REVIEWERS)), not(Owner), is(InStatus(EVALUABLE))]))
        .allow(ASSIGN, Clause::of([is(Admin)]))
        .allow(ASSIGN, Clause::of([is(AnyRole(&[Role::Manager]))]))
        .allow(
            ASSIGN,
            Clause::of([is(AnyRole(&[Role::Analyst])), not(HasAssignee), is(InStatus(PENDING))]),
        )
        .allow(ARCHIVE, Clause::of([is(Admin)]))
        .allow(ARCHIVE, Clause::of([is(AnyRole(&[Role::Analyst])), is(InStatus(DECIDED))]))
        .allow(RESTORE, Clause::of([is(Admin)]))
        .allow(FORCE_DELETE, Clause::of([is(Admin)]));

    super::with_common_gates(builder).build()
}
