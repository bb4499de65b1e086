use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{GroupRole, GroupType, ResourceKind, Status};

const PUBLIC: &[Status] = &[Status::Group(GroupType::Public)];

pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::Group)
        .allow_any(VIEW, [is(Admin), is(Owner), is(Member), is(InStatus(PUBLIC))])
        .allow_any(UPDATE, [is(Admin), is(Owner), is(MemberRole(&[GroupRole::Admin]))])
        .allow_any(DELETE, [is(Admin), is(Owner)])
        .allow_any(
            MANAGE_MEMBERS,
            [is(Admin), is(Owner), is(MemberRole(&[GroupRole::Admin, GroupRole::Moderator]))],
        )
        .allow_any(POST, [is(Admin), is(Member)])
        .allow(JOIN, Clause::of([not(Member), is(InStatus(PUBLIC))]))
        .allow(JOIN, Clause::of([is(Admin), not(Member)]))
        // the creator cannot walk away from the group
        .allow(LEAVE, Clause::of([is(Member), not(Owner)]));

    super::with_common_gates(builder).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Actor;
    use crate::models::{GroupSnapshot, Resource, Role};
    use uuid::Uuid;

    fn allowed(actor: &Actor, action: &str, resource: &Resource) -> bool {
        policy().unwrap().first_match(action, actor, resource).is_some()
    }

    #[test]
    fn join_only_public_groups_not_yet_joined() {
        let user = Actor::new(Uuid::new_v4(), Role::User);
        let public: Resource = GroupSnapshot::new(Uuid::new_v4()).with_type(GroupType::Public).into();
        let private: Resource = GroupSnapshot::new(Uuid::new_v4()).with_type(GroupType::Private).into();
        let joined: Resource = GroupSnapshot::new(Uuid::new_v4())
            .with_type(GroupType::Public)
            .with_member(user.id, GroupRole::Member)
            .into();

        assert!(allowed(&user, JOIN, &public));
        assert!(!allowed(&user, JOIN, &private));
        assert!(!allowed(&user, JOIN, &joined));
    }

    #[test]
    fn creator_cannot_leave() {
        let creator = Actor::new(Uuid::new_v4(), Role::User);
        let member = Actor::new(Uuid::new_v4(), Role::User);
        let resource: Resource = GroupSnapshot::new(Uuid::new_v4())
            .created_by(creator.id)
            .with_member(creator.id, GroupRole::Admin)
            .with_member(member.id, GroupRole::Member)
            .into();

        assert!(!allowed(&creator, LEAVE, &resource));
        assert!(allowed(&member, LEAVE, &resource));
        assert!(!allowed(&Actor::new(Uuid::new_v4(), Role::User), LEAVE, &resource));
    }

    #[test]
    fn moderators_manage_members_but_do_not_edit() {
        let moderator = Actor::new(Uuid::new_v4(), Role::User);
        let resource: Resource = GroupSnapshot::new(Uuid::new_v4())
            .created_by(Uuid::new_v4())
            .with_member(moderator.id, GroupRole::Moderator)
            .with_type(GroupType::Restricted)
            .into();

        assert!(allowed(&moderator, MANAGE_MEMBERS, &resource));
        assert!(!allowed(&moderator, UPDATE, &resource));
        assert!(allowed(&moderator, POST, &resource));
    }

    #[test]
    fn private_group_hidden_from_outsiders() {
        let outsider = Actor::new(Uuid::new_v4(), Role::Analyst);
        let resource: Resource = GroupSnapshot::new(Uuid::new_v4()).with_type(GroupType::Private).into();
        assert!(!allowed(&outsider, VIEW, &resource));
    }
}
