use crate::authz::actions::*;
use crate::authz::clause::{is, not, Clause};
use crate::authz::policy::Policy;
use crate::authz::primitives::Predicate::*;
use crate::errors::PolicyError;
use crate::models::{MemberFlag as Flag, MilestoneStatus, ResourceKind, Role, Status};

const COMPLETED: &[Status] = &[Status::Milestone(MilestoneStatus::Completed)];
const IN_PROGRESS: &[Status] = &[Status::Milestone(MilestoneStatus::InProgress)];

const MANAGER: &[Role] = &[Role::Manager];

// Ownership of a milestone is the parent project's; it has no owner of its own.
pub fn policy() -> Result<Policy, PolicyError> {
    let builder = Policy::builder(ResourceKind::Milestone)
        .allow(VIEW_ANY, Clause::of([is(Active)]))
        .allow_any(VIEW, [is(Admin), is(ParentOwner), is(Assignee), is(Member)])
        .allow(CREATE, Clause::of([is(Active), is(Admin)]))
        .allow(CREATE, Clause::of([is(Active), is(AnyRole(MANAGER)), is(ParentOwner)]))
        .allow(CREATE, Clause::of([is(Active), is(MemberFlag(Flag::CanManageMilestones))]))
        .allow(UPDATE, Clause::of([is(Admin)]))
        .allow(UPDATE, Clause::of([is(AnyRole(MANAGER)), is(ParentOwner)]))
        .allow(UPDATE, Clause::of([is(Assignee)]))
        .allow(UPDATE, Clause::of([is(MemberFlag(Flag::CanManageMilestones))]))
        .allow(DELETE, Clause::of([is(Admin)]))
        .allow(
            DELETE,
            Clause::of([is(AnyRole(MANAGER)), is(ParentOwner), not(InStatus(COMPLETED))]),
        )
        .allow(COMPLETE, Clause::of([is(Admin)]))
        .allow(COMPLETE, Clause::of([is(AnyRole(MANAGER)), is(ParentOwner)]))
        .allow(COMPLETE, Clause::of([is(Assignee), is(InStatus(IN_PROGRESS))]))
        .allow_any(
            VIEW_REPORTS,
            [is(Admin), is(ParentOwner), is(MemberFlag(Flag::CanViewReports))],
        );

    super::with_export(builder).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Actor;
    use crate::models::{MilestoneSnapshot, ProjectMember, ProjectSnapshot, Resource};
    use uuid::Uuid;

    fn allowed(actor: &Actor, action: &str, resource: &Resource) -> bool {
        policy().unwrap().first_match(action, actor, resource).is_some()
    }

    #[test]
    fn manager_role_alone_is_not_enough() {
        let project_manager = Actor::new(Uuid::new_v4(), Role::Manager);
        let other_manager = Actor::new(Uuid::new_v4(), Role::Manager);
        let project = ProjectSnapshot::new(Uuid::new_v4()).with_manager(project_manager.id);
        let milestone: Resource = MilestoneSnapshot::new(Uuid::new_v4()).in_project(&project).into();

        assert!(allowed(&project_manager, UPDATE, &milestone));
        assert!(!allowed(&other_manager, UPDATE, &milestone));
    }

    #[test]
    fn project_manager_without_manager_role_cannot_update() {
        let demoted = Actor::new(Uuid::new_v4(), Role::User);
        let project = ProjectSnapshot::new(Uuid::new_v4()).with_manager(demoted.id);
        let milestone: Resource = MilestoneSnapshot::new(Uuid::new_v4()).in_project(&project).into();

        assert!(!allowed(&demoted, UPDATE, &milestone));
        assert!(allowed(&demoted, VIEW, &milestone));
    }

    #[test]
    fn member_flags_grant_management_and_reports() {
        let planner = Actor::new(Uuid::new_v4(), Role::User);
        let viewer = Actor::new(Uuid::new_v4(), Role::User);
        let project = ProjectSnapshot::new(Uuid::new_v4())
            .with_manager(Uuid::new_v4())
            .with_member(ProjectMember::new(planner.id).with_flag(Flag::CanManageMilestones))
            .with_member(ProjectMember::new(viewer.id).with_flag(Flag::CanViewReports));
        let milestone: Resource = MilestoneSnapshot::new(Uuid::new_v4()).in_project(&project).into();

        assert!(allowed(&planner, UPDATE, &milestone));
        assert!(allowed(&planner, CREATE, &milestone));
        assert!(!allowed(&planner, VIEW_REPORTS, &milestone));
        assert!(allowed(&viewer, VIEW_REPORTS, &milestone));
        assert!(!allowed(&viewer, UPDATE, &milestone));
        assert!(allowed(&viewer, VIEW, &milestone));
    }

    #[test]
    fn assignee_completes_only_running_milestones() {
        let assignee = Actor::new(Uuid::new_v4(), Role::User);
        let running: Resource = MilestoneSnapshot::new(Uuid::new_v4())
            .assigned_to(assignee.id)
            .with_status(MilestoneStatus::InProgress)
            .into();
        let pending: Resource = MilestoneSnapshot::new(Uuid::new_v4())
            .assigned_to(assignee.id)
            .with_status(MilestoneStatus::Pending)
            .into();

        assert!(allowed(&assignee, COMPLETE, &running));
        assert!(!allowed(&assignee, COMPLETE, &pending));
        assert!(allowed(&assignee, UPDATE, &pending));
    }

    #[test]
    fn completed_milestones_stay_with_admins() {
        let manager = Actor::new(Uuid::new_v4(), Role::Manager);
        let project = ProjectSnapshot::new(Uuid::new_v4()).with_manager(manager.id);
        let done: Resource = MilestoneSnapshot::new(Uuid::new_v4())
            .in_project(&project)
            .with_status(MilestoneStatus::Completed)
            .into();

        assert!(!allowed(&manager, DELETE, &done));
        assert!(allowed(&Actor::new(Uuid::new_v4(), Role::Admin), DELETE, &done));
    }
}
