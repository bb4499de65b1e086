pub mod app;
pub mod authz;
pub mod config;
pub mod docs;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used items for tests
pub use app::create_app;
pub use authz::{authorize, Actor, Decision, PolicyEvaluator, PolicyRegistry, ReasonCode};
pub use models::{Resource, ResourceKind};
