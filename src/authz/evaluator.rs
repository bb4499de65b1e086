use crate::models::Resource;

use super::actor::Actor;
use super::decision::{Decision, ReasonCode};
use super::registry::PolicyRegistry;

/// Policy evaluator trait for pluggable authorization logic
pub trait PolicyEvaluator: Send + Sync {
    /// Decide whether `actor` may perform `action` on `resource` of `kind`.
    fn authorize(&self, actor: &Actor, kind: &str, action: &str, resource: &Resource) -> Decision;
}

/// Table-driven evaluation
///
/// 1. unknown kind -> deny
/// 2. unknown action -> deny
/// 3. snapshot of another kind -> deny
/// 4. first clause that holds -> allow
/// 5. deny
impl PolicyEvaluator for PolicyRegistry {
    fn authorize(&self, actor: &Actor, kind: &str, action: &str, resource: &Resource) -> Decision {
        let decision = evaluate(self, actor, kind, action, resource);

        match decision.reason {
            None => tracing::debug!(
                actor_id = %actor.id,
                kind = %kind,
                action = %action,
                "authorization allowed"
            ),
            Some(reason) => tracing::debug!(
                actor_id = %actor.id,
                kind = %kind,
                action = %action,
                reason = %reason,
                "authorization denied"
            ),
        }

        decision
    }
}

fn evaluate(
    registry: &PolicyRegistry,
    actor: &Actor,
    kind: &str,
    action: &str,
    resource: &Resource,
) -> Decision {
    let Some(policy) = registry.get(kind) else {
        return Decision::deny(ReasonCode::UnknownResourceKind);
    };

    if policy.rule(action).is_none() {
        return Decision::deny(ReasonCode::UnknownAction);
    }

    if resource.kind() != policy.kind() {
        return Decision::deny(ReasonCode::ResourceKindMismatch);
    }

    match policy.first_match(action, actor, resource) {
        Some(_) => Decision::allow(),
        None => Decision::deny(ReasonCode::NoMatchingRule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::actions;
    use crate::models::{EvidenceSnapshot, EvidenceStatus, ProjectSnapshot, Role};
    use uuid::Uuid;

    fn registry() -> PolicyRegistry {
        PolicyRegistry::standard().unwrap()
    }

    #[test]
    fn unknown_kind_fails_closed() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let resource: Resource = EvidenceSnapshot::default().into();

        let decision = registry().authorize(&admin, "nonexistent_kind", actions::VIEW, &resource);
        assert_eq!(decision, Decision::deny(ReasonCode::UnknownResourceKind));
    }

    #[test]
    fn unknown_action_fails_closed() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let resource: Resource = EvidenceSnapshot::default().into();

        let decision = registry().authorize(&admin, "evidence", "teleport", &resource);
        assert_eq!(decision, Decision::deny(ReasonCode::UnknownAction));
    }

    #[test]
    fn snapshot_of_wrong_kind_is_denied() {
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let project: Resource = ProjectSnapshot::new(Uuid::new_v4()).into();

        let decision = registry().authorize(&admin, "evidence", actions::VIEW, &project);
        assert_eq!(decision, Decision::deny(ReasonCode::ResourceKindMismatch));
    }

    #[test]
    fn no_matching_rule_denies() {
        let user = Actor::new(Uuid::new_v4(), Role::User);
        let resource: Resource = EvidenceSnapshot::new(Uuid::new_v4())
            .submitted_by(Uuid::new_v4())
            .with_status(EvidenceStatus::Pending)
            .into();

        let decision = registry().authorize(&user, "evidence", actions::DELETE, &resource);
        assert_eq!(decision, Decision::deny(ReasonCode::NoMatchingRule));
    }

    #[test]
    fn allow_carries_no_reason() {
        let user = Actor::new(Uuid::new_v4(), Role::User);
        let resource: Resource = EvidenceSnapshot::new(Uuid::new_v4())
            .submitted_by(user.id)
            .with_status(EvidenceStatus::Pending)
            .into();

        let decision = registry().authorize(&user, "evidence", actions::UPDATE, &resource);
        assert_eq!(decision, Decision::allow());
    }
}
