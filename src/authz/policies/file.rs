use crate::authz::actions::*;
use crate::authz::clause::{is, Clause};
use crate::authz::policy::{Policy, PolicyBuilder};
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{AccessLevel, ResourceKind, Role, Status};

const PUBLIC: &[Status] = &[Status::File(AccessLevel::Public)];
const INTERNAL: &[Status] = &[Status::File(AccessLevel::Internal)];
const RESTRICTED: &[Status] = &[Status::File(AccessLevel::Restricted)];
const CONFIDENTIAL: &[Status] = &[Status::File(AccessLevel::Confidential)];

/// Read access by access level; shared by `view` and `download`.
fn readable(builder: PolicyBuilder, action: &'static str) -> PolicyBuilder {
    builder
        .allow(action, Clause::of([is(Admin)]))
        .allow(action, Clause::of([is(Owner)]))
        .allow(action, Clause::of([is(InStatus(PUBLIC))]))
        .allow(action, Clause::of([is(InStatus(INTERNAL))]))
        .allow(
            action,
            Clause::of([
                is(InStatus(RESTRICTED)),
                is(AnyRole(&[Role::Admin, Role::Analyst, Role::Investigator])),
            ]),
        )
        .allow(
            action,
            Clause::of([is(InStatus(CONFIDENTIAL)), is(AnyRole(&[Role::Admin, Role::Analyst]))]),
        )
}

pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::File);
    let builder = readable(builder, VIEW);
    let builder = readable(builder, DOWNLOAD)
        .allow_any(UPDATE, [is(Admin), is(Owner)])
        .allow_any(DELETE, [is(Admin), is(Owner)]);

    super::with_common_gates(builder).build()
}
