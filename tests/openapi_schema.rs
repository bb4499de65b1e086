use serde_json::Value;

#[test]
fn openapi_documents_authorize_request() -> anyhow::Result<()> {
    // Build the OpenAPI document the same way the server does
    let doc = evidence_authz::docs::build_openapi(8000);
    let v = serde_json::to_value(&doc)?;

    let props = v
        .get("components")
        .and_then(Value::as_object)
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
        .and_then(|s| s.get("AuthorizeRequest"))
        .and_then(Value::as_object)
        .and_then(|t| t.get("properties"))
        .and_then(Value::as_object)
        .expect("components.schemas.AuthorizeRequest.properties must exist");

    let keys = ["actor", "kind", "action", "resource"];
    for k in &keys {
        assert!(props.contains_key(*k), "OpenAPI AuthorizeRequest schema missing '{}'", k);
    }

    Ok(())
}

#[test]
fn openapi_lists_authz_paths() -> anyhow::Result<()> {
    let doc = evidence_authz::docs::build_openapi(8000);
    let v = serde_json::to_value(&doc)?;

    let paths = v
        .get("paths")
        .and_then(Value::as_object)
        .expect("paths must exist");
    for p in ["/authz/check", "/authz/enforce", "/authz/policies/{kind}", "/api/health"] {
        assert!(paths.contains_key(p), "OpenAPI missing path '{}'", p);
    }

    let server = v["servers"][0]["url"].as_str().unwrap_or_default();
    assert_eq!(server, "http://localhost:8000");
    Ok(())
}
