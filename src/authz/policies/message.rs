use crate::authz::actions::*;
use crate::authz::clause::is;
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::ResourceKind;

// Owner is the sender, members are the recipients.
pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::Message)
        .allow_any(VIEW, [is(Admin), is(Owner), is(Member)])
        .allow_any(UPDATE, [is(Admin), is(Owner)])
        .allow_any(DELETE, [is(Admin), is(Owner), is(Member)])
        .allow_any(REPLY, [is(Admin), is(Owner), is(Member)])
        .allow_any(MARK_READ, [is(Admin), is(Member)]);

    super::with_common_gates(builder).build()
}
