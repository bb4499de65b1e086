use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::authz::PolicyRegistry;
use crate::routes::{authz, health};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PolicyRegistry>,
}

impl AppState {
    pub fn new(registry: PolicyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

pub fn create_app(registry: PolicyRegistry) -> Router {
    let state = AppState::new(registry);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let authz_routes = Router::new()
        .route("/check", post(authz::check))
        .route("/enforce", post(authz::enforce))
        .route("/policies", get(authz::list_policies))
        .route("/policies/:kind", get(authz::get_policy));

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/authz", authz_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
