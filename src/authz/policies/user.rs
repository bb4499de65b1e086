use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{ResourceKind, Role};

// Self-harm exclusions are negated literals inside the admin clause.
pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::User)
        .allow(VIEW_ANY, Clause::of([is(Active), is(AnyRole(&[Role::Admin, Role::Manager]))]))
        .allow_any(VIEW, [is(Admin), is(SelfUser), is(AnyRole(&[Role::Manager]))])
        .allow(CREATE, Clause::of([is(Active), is(Admin)]))
        .allow_any(UPDATE, [is(Admin), is(SelfUser)])
        .allow(DELETE, Clause::of([is(Admin), not(SelfUser)]))
        .allow(CHANGE_ROLE, Clause::of([is(Admin), not(SelfUser)]))
        .allow(DEACTIVATE, Clause::of([is(Admin), not(SelfUser)]))
        .allow(
            IMPERSONATE,
            Clause::of([is(Admin), not(SelfUser), not(SubjectRole(&[Role::Admin]))]),
        );

    super::with_export(builder).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Actor;
    use crate::models::{Resource, UserSnapshot};
    use uuid::Uuid;

    fn allowed(actor: &Actor, action: &str, resource: &Resource) -> bool {
        policy().unwrap().first_match(action, actor, resource).is_some()
    }

    #[test]
    fn admin_cannot_harm_own_account() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let me: Resource = UserSnapshot::new(admin.id, Role::Admin).into();

        for action in [DELETE, CHANGE_ROLE, DEACTIVATE, IMPERSONATE] {
            assert!(!allowed(&admin, action, &me), "{action} on self");
        }
        assert!(allowed(&admin, UPDATE, &me));
    }

    #[test]
    fn admins_are_not_impersonated() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let other_admin: Resource = UserSnapshot::new(Uuid::new_v4(), Role::Admin).into();
        let analyst: Resource = UserSnapshot::new(Uuid::new_v4(), Role::Analyst).into();

        assert!(!allowed(&admin, IMPERSONATE, &other_admin));
        assert!(allowed(&admin, IMPERSONATE, &analyst));
        assert!(allowed(&admin, DELETE, &other_admin));
    }

    #[test]
    fn users_manage_only_their_profile() {
        let user = Actor::new(Uuid::new_v4(), Role::User);
        let me: Resource = UserSnapshot::new(user.id, Role::User).into();
        let other: Resource = UserSnapshot::new(Uuid::new_v4(), Role::User).into();

        assert!(allowed(&user, VIEW, &me));
        assert!(allowed(&user, UPDATE, &me));
        assert!(!allowed(&user, VIEW, &other));
        assert!(!allowed(&user, DELETE, &me));
        assert!(!allowed(&user, VIEW_ANY, &other));
    }

    #[test]
    fn managers_browse_the_directory() {
        let manager = Actor::new(Uuid::new_v4(), Role::Manager);
        let other: Resource = UserSnapshot::new(Uuid::new_v4(), Role::User).into();

        assert!(allowed(&manager, VIEW_ANY, &other));
        assert!(allowed(&manager, VIEW, &other));
        assert!(!allowed(&manager, UPDATE, &other));
    }
}
