use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{MemberFlag as Flag, ProjectStatus, ResourceKind, Role, Status};

const CLOSED: &[Status] = &[
    Status::Project(ProjectStatus::Completed),
    Status::Project(ProjectStatus::Cancelled),
];
const PLANNING: &[Status] = &[Status::Project(ProjectStatus::Planning)];

pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::Project)
        .allow(VIEW_ANY, Clause::of([is(Active)]))
        .allow_any(
            VIEW,
            [is(Admin), is(Owner), is(Member), is(AnyRole(&[Role::Analyst, Role::Investigator]))],
        )
        .allow(CREATE, Clause::of([is(Active), is(AnyRole(&[Role::Admin, Role::Manager]))]))
        .allow(UPDATE, Clause::of([is(Admin)]))
        .allow(UPDATE, Clause::of([is(Owner), not(InStatus(CLOSED))]))
        .allow(DELETE, Clause::of([is(Admin)]))
        .allow(DELETE, Clause::of([is(Owner), is(InStatus(PLANNING))]))
        .allow(MANAGE_MEMBERS, Clause::of([is(Admin)]))
        .allow(MANAGE_MEMBERS, Clause::of([is(Owner), not(InStatus(CLOSED))]))
        .allow_any(
            VIEW_REPORTS,
            [is(Admin), is(Owner), is(MemberFlag(Flag::CanViewReports)), is(AnyRole(&[Role::Analyst]))],
        )
        .allow(RESTORE, Clause::of([is(Admin)]))
        .allow(FORCE_DELETE, Clause::of([is(Admin)]));

    super::with_export(builder).build()
}
