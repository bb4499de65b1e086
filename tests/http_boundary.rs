use anyhow::Result;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`
use uuid::Uuid;

use evidence_authz::{create_app, PolicyRegistry};

fn app() -> Result<Router> {
    Ok(create_app(PolicyRegistry::standard()?))
}

fn post_json(uri: &str, payload: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload)?))?)
}

async fn json_body(resp: Response) -> Result<Value> {
    let bytes = body::to_bytes(resp.into_body(), 1_048_576).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn evidence_request(actor_id: Uuid, submitted_by: Uuid, status: &str) -> Value {
    json!({
        "actor": { "id": actor_id, "role": "user", "is_active": true },
        "kind": "evidence",
        "action": "update",
        "resource": {
            "kind": "evidence",
            "id": Uuid::new_v4(),
            "submitted_by_id": submitted_by,
            "status": status
        }
    })
}

#[tokio::test]
async fn check_returns_only_the_verdict() -> Result<()> {
    let actor = Uuid::new_v4();
    let resp = app()?
        .oneshot(post_json("/authz/check", &evidence_request(actor, actor, "pending"))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await?, json!({ "allowed": true }));

    let resp = app()?
        .oneshot(post_json("/authz/check", &evidence_request(actor, actor, "approved"))?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await?, json!({ "allowed": false }));

    Ok(())
}

#[tokio::test]
async fn enforce_allows_with_no_content() -> Result<()> {
    let actor = Uuid::new_v4();
    let resp = app()?
        .oneshot(post_json("/authz/enforce", &evidence_request(actor, actor, "pending"))?)
        .await?;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn denial_body_is_fixed() -> Result<()> {
    let resp = app()?
        .oneshot(post_json(
            "/authz/enforce",
            &evidence_request(Uuid::new_v4(), Uuid::new_v4(), "pending"),
        )?)
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let denied_by_rule = json_body(resp).await?;
    assert_eq!(denied_by_rule, json!({ "error": "forbidden", "message": "forbidden" }));

    // unknown kinds look exactly the same from outside
    let mut payload = evidence_request(Uuid::new_v4(), Uuid::new_v4(), "pending");
    payload["kind"] = json!("nonexistent_kind");
    let resp = app()?.oneshot(post_json("/authz/enforce", &payload)?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(resp).await?, denied_by_rule);

    Ok(())
}

#[tokio::test]
async fn policies_are_listed_per_kind() -> Result<()> {
    let req = Request::builder().uri("/authz/policies").body(Body::empty())?;
    let resp = app()?.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await?;
    let kinds: Vec<&str> = v
        .as_array()
        .expect("array of policies")
        .iter()
        .filter_map(|p| p.get("kind").and_then(Value::as_str))
        .collect();
    assert_eq!(kinds.len(), 8);
    assert!(kinds.contains(&"time_log"), "missing time_log in {v}");

    Ok(())
}

#[tokio::test]
async fn policy_detail_renders_clauses() -> Result<()> {
    let req = Request::builder().uri("/authz/policies/evidence").body(Body::empty())?;
    let resp = app()?.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await?;
    assert_eq!(v["kind"], "evidence");
    let update = v["rules"]
        .as_array()
        .expect("rules")
        .iter()
        .find(|r| r["action"] == "update")
        .expect("update rule");
    assert_eq!(update["clauses"][0], "admin");

    Ok(())
}

#[tokio::test]
async fn unknown_policy_kind_is_not_found() -> Result<()> {
    let req = Request::builder().uri("/authz/policies/spaceship").body(Body::empty())?;
    let resp = app()?.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let v = json_body(resp).await?;
    assert_eq!(v["error"], "not_found");
    Ok(())
}

#[tokio::test]
async fn malformed_snapshot_is_rejected() -> Result<()> {
    let payload = json!({
        "actor": { "id": Uuid::new_v4(), "role": "user", "is_active": true },
        "kind": "evidence",
        "action": "update",
        "resource": { "kind": "evidence", "status": "shredded" }
    });
    let resp = app()?.oneshot(post_json("/authz/check", &payload)?).await?;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let v = json_body(resp).await?;
    assert_eq!(v["error"], "bad_request");
    Ok(())
}

#[tokio::test]
async fn actor_without_active_flag_cannot_create() -> Result<()> {
    let payload = json!({
        "actor": { "id": Uuid::new_v4(), "role": "user" },
        "kind": "evidence",
        "action": "create",
        "resource": { "kind": "evidence" }
    });

    let resp = app()?.oneshot(post_json("/authz/check", &payload)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await?, json!({ "allowed": false }));

    let resp = app()?.oneshot(post_json("/authz/enforce", &payload)?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let mut active = payload.clone();
    active["actor"]["is_active"] = json!(true);
    let resp = app()?.oneshot(post_json("/authz/check", &active)?).await?;
    assert_eq!(json_body(resp).await?, json!({ "allowed": true }));

    Ok(())
}
