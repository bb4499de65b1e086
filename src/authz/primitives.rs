//! Rule primitives.
//!
//! Every primitive is a pure, total function of the actor and the resource
//! snapshot. Missing relationship data never matches.

use std::fmt;

use crate::models::{GroupRole, MemberFlag, Resource, Role, Status};

use super::actor::Actor;

pub fn is_admin(actor: &Actor) -> bool {
    actor.is_admin()
}

pub fn is_active(actor: &Actor) -> bool {
    actor.is_active
}

pub fn has_any_role(actor: &Actor, roles: &[Role]) -> bool {
    roles.contains(&actor.role)
}

/// The resource is a user account and it is the actor's own.
pub fn is_self(actor: &Actor, resource: &Resource) -> bool {
    resource.subject_user_id() == Some(actor.id)
}

pub fn is_owner(actor: &Actor, resource: &Resource) -> bool {
    resource.owner_id() == Some(actor.id)
}

/// The actor manages the project a milestone or time log belongs to.
pub fn is_parent_owner(actor: &Actor, resource: &Resource) -> bool {
    resource.parent_owner_id() == Some(actor.id)
}

pub fn is_assignee(actor: &Actor, resource: &Resource) -> bool {
    resource.assignee_id() == Some(actor.id)
}

pub fn has_assignee(resource: &Resource) -> bool {
    resource.assignee_id().is_some()
}

pub fn is_member(actor: &Actor, resource: &Resource) -> bool {
    resource.has_member(actor.id)
}

pub fn has_member_flag(actor: &Actor, resource: &Resource, flag: MemberFlag) -> bool {
    resource.member_flag(actor.id, flag)
}

pub fn has_member_role(actor: &Actor, resource: &Resource, roles: &[GroupRole]) -> bool {
    resource
        .member_role(actor.id)
        .map(|role| roles.contains(&role))
        .unwrap_or(false)
}

/// The target user account holds one of `roles`.
pub fn subject_has_role(resource: &Resource, roles: &[Role]) -> bool {
    resource
        .subject_role()
        .map(|role| roles.contains(&role))
        .unwrap_or(false)
}

pub fn in_status(resource: &Resource, statuses: &[Status]) -> bool {
    resource
        .status()
        .map(|status| statuses.contains(&status))
        .unwrap_or(false)
}

/// A named primitive as it appears inside a policy clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Admin,
    Active,
    AnyRole(&'static [Role]),
    SelfUser,
    Owner,
    ParentOwner,
    Assignee,
    HasAssignee,
    Member,
    MemberFlag(MemberFlag),
    MemberRole(&'static [GroupRole]),
    SubjectRole(&'static [Role]),
    InStatus(&'static [Status]),
}

impl Predicate {
    pub fn eval(&self, actor: &Actor, resource: &Resource) -> bool {
        match *self {
            Predicate::Admin => is_admin(actor),
            Predicate::Active => is_active(actor),
            Predicate::AnyRole(roles) => has_any_role(actor, roles),
            Predicate::SelfUser => is_self(actor, resource),
            Predicate::Owner => is_owner(actor, resource),
            Predicate::ParentOwner => is_parent_owner(actor, resource),
            Predicate::Assignee => is_assignee(actor, resource),
            Predicate::HasAssignee => has_assignee(resource),
            Predicate::Member => is_member(actor, resource),
            Predicate::MemberFlag(flag) => has_member_flag(actor, resource, flag),
            Predicate::MemberRole(roles) => has_member_role(actor, resource, roles),
            Predicate::SubjectRole(roles) => subject_has_role(resource, roles),
            Predicate::InStatus(statuses) => in_status(resource, statuses),
        }
    }
}

fn write_set<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, items: &[T]) -> fmt::Result {
    write!(f, "{name}{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("}")
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Predicate::Admin => f.write_str("admin"),
            Predicate::Active => f.write_str("active"),
            Predicate::AnyRole(roles) => write_set(f, "role", roles),
            Predicate::SelfUser => f.write_str("self"),
            Predicate::Owner => f.write_str("owner"),
            Predicate::ParentOwner => f.write_str("parent_owner"),
            Predicate::Assignee => f.write_str("assignee"),
            Predicate::HasAssignee => f.write_str("has_assignee"),
            Predicate::Member => f.write_str("member"),
            Predicate::MemberFlag(flag) => write!(f, "member_flag({})", flag.as_str()),
            Predicate::MemberRole(roles) => write_set(f, "member_role", roles),
            Predicate::SubjectRole(roles) => write_set(f, "subject_role", roles),
            Predicate::InStatus(statuses) => write_set(f, "status", statuses),
        }
    }
}
