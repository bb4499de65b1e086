use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::authz::{self as engine, Actor, PolicyEvaluator};
use crate::errors::{AppError, AppResult};
use crate::models::Resource;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorizeRequest {
    pub actor: Actor,
    #[schema(example = "evidence")]
    pub kind: String,
    #[schema(example = "update")]
    pub action: String,
    /// Resource snapshot tagged by `kind`, e.g. {"kind": "evidence", "submitted_by_id": "...", "status": "pending"}
    #[schema(value_type = Object)]
    pub resource: Resource,
}

/// Only the verdict leaves the service; reason codes are logged.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorizeResponse {
    pub allowed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolicySummary {
    #[schema(example = "evidence")]
    pub kind: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RuleSummary {
    #[schema(example = "delete")]
    pub action: String,
    /// Alternatives, any of which allows the action.
    #[schema(example = json!(["admin", "owner ∧ status{pending}"]))]
    pub clauses: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolicyDetail {
    pub kind: String,
    pub rules: Vec<RuleSummary>,
}

#[utoipa::path(
    post,
    path = "/authz/check",
    tag = "Authorization",
    request_body = AuthorizeRequest,
    responses(
        (status = 200, description = "Decision for the snapshot", body = AuthorizeResponse),
        (status = 400, description = "Malformed actor or snapshot")
    )
)]
pub async fn check(
    State(state): State<AppState>,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> AppResult<Json<AuthorizeResponse>> {
    let Json(payload) = payload?;
    let decision = state.registry.authorize(
        &payload.actor,
        &payload.kind,
        &payload.action,
        &payload.resource,
    );

    Ok(Json(AuthorizeResponse {
        allowed: decision.is_allowed(),
    }))
}

#[utoipa::path(
    post,
    path = "/authz/enforce",
    tag = "Authorization",
    request_body = AuthorizeRequest,
    responses(
        (status = 204, description = "Action allowed"),
        (status = 400, description = "Malformed actor or snapshot"),
        (status = 403, description = "Action forbidden")
    )
)]
pub async fn enforce(
    State(state): State<AppState>,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(payload) = payload?;
    engine::enforce(
        state.registry.as_ref(),
        &payload.actor,
        &payload.kind,
        &payload.action,
        &payload.resource,
    )?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/authz/policies",
    tag = "Authorization",
    responses((status = 200, description = "Actions per resource kind", body = [PolicySummary]))
)]
pub async fn list_policies(State(state): State<AppState>) -> AppResult<Json<Vec<PolicySummary>>> {
    let summaries = state
        .registry
        .kinds()
        .into_iter()
        .filter_map(|kind| state.registry.get(kind.as_str()))
        .map(|policy| PolicySummary {
            kind: policy.kind().to_string(),
            actions: policy.actions().into_iter().map(String::from).collect(),
        })
        .collect();

    Ok(Json(summaries))
}

#[utoipa::path(
    get,
    path = "/authz/policies/{kind}",
    tag = "Authorization",
    params(("kind" = String, Path, description = "Resource kind, e.g. evidence")),
    responses(
        (status = 200, description = "Policy table", body = PolicyDetail),
        (status = 404, description = "Unknown resource kind")
    )
)]
pub async fn get_policy(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<Json<PolicyDetail>> {
    let policy = state
        .registry
        .get(&kind)
        .ok_or_else(|| AppError::not_found(format!("no policy for resource kind {kind}")))?;

    let rules = policy
        .actions()
        .into_iter()
        .map(|action| RuleSummary {
            action: action.to_string(),
            clauses: policy
                .rule(action)
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
        .collect();

    Ok(Json(PolicyDetail {
        kind: policy.kind().to_string(),
        rules,
    }))
}
