//! # Axum Helpers
//!
//! Shared HTTP plumbing for the back-office services.
//!
//! - **[`errors`]**: `AppError` → `{success: false, code, error, message}` bodies
//! - **[`response`]**: `ApiResponse` success envelope
//! - **[`extractors`]**: `UuidPath`, `ValidatedJson`, `QueryPairs`
//! - **[`auth`]**: stateless JWT verification and `CurrentUser` / `AdminUser`
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health, graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod openapi;
pub mod response;
pub mod server;

pub use auth::{
    AdminUser, AuthError, CurrentUser, JwtAuth, JwtClaims, JwtConfig, Role,
    optional_jwt_auth_middleware,
};
pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use extractors::{QueryPairs, UuidPath, ValidatedJson};
pub use http::{create_cors_layer, security_headers};
pub use openapi::{BEARER_AUTH, BearerAuthAddon};
pub use response::ApiResponse;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
