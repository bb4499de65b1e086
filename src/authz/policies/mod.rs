//! Policy tables, one module per resource kind.
//!
//! Each `policy()` lists, per action, the clauses that allow it. Conventions
//! shared by every table live here.

pub mod evidence;
pub mod file;
pub mod group;
pub mod message;
pub mod milestone;
pub mod project;
pub mod time_log;
pub mod user;

use crate::models::Role;

use super::actions::{CREATE, EXPORT, VIEW_ANY};
use super::clause::{is, Clause};
use super::policy::PolicyBuilder;
use super::primitives::Predicate::{Active, AnyRole};

const EXPORTERS: &[Role] = &[Role::Admin, Role::Analyst];

/// `view_any` and `create` for any active account, `export` for admins and
/// analysts.
pub(crate) fn with_common_gates(builder: PolicyBuilder) -> PolicyBuilder {
    builder
        .allow(VIEW_ANY, Clause::of([is(Active)]))
        .allow(CREATE, Clause::of([is(Active)]))
        .allow(EXPORT, Clause::of([is(AnyRole(EXPORTERS))]))
}

pub(crate) fn with_export(builder: PolicyBuilder) -> PolicyBuilder {
    builder.allow(EXPORT, Clause::of([is(AnyRole(EXPORTERS))]))
}
