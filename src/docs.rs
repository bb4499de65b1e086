use axum::Router;
use utoipa::openapi::{OpenApi as OpenApiDoc, Server};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::authz::Actor;
use crate::models::Role;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
	paths(
		routes::health::health,
		routes::authz::check,
		routes::authz::enforce,
		routes::authz::list_policies,
		routes::authz::get_policy
	),
	components(
		schemas(
			Actor,
			Role,
			routes::authz::AuthorizeRequest,
			routes::authz::AuthorizeResponse,
			routes::authz::PolicySummary,
			routes::authz::RuleSummary,
			routes::authz::PolicyDetail,
			routes::health::HealthResponse
		)
	),
	tags(
		(name = "Authorization", description = "Policy decisions and policy tables"),
		(name = "Health", description = "Liveness")
	)
)]
pub struct ApiDoc;

pub fn build_openapi(port: u16) -> OpenApiDoc {
	let mut doc = ApiDoc::openapi();
	doc.servers = Some(vec![Server::new(format!("http://localhost:{port}"))]);
	doc
}

pub fn swagger_routes(doc: OpenApiDoc) -> Router {
	let swagger_config = utoipa_swagger_ui::Config::new(["/api-docs/openapi.json"]).try_it_out_enabled(true);

	Router::new().merge(
		SwaggerUi::new("/docs")
			.url("/api-docs/openapi.json", doc)
			.config(swagger_config),
	)
}
