//! Stateless bearer-token authentication.
//!
//! [`optional_jwt_auth_middleware`] runs on every request and stores verified
//! [`JwtClaims`] in the request extensions. Handlers opt in to authentication
//! through the [`CurrentUser`] and [`AdminUser`] extractors.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, optional_jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//! let app = router.layer(axum::middleware::from_fn_with_state(auth, optional_jwt_auth_middleware));
//! ```

pub mod config;
pub mod extractors;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use extractors::{AdminUser, CurrentUser};
pub use jwt::{AuthError, JwtAuth, JwtClaims, Role};
pub use middleware::optional_jwt_auth_middleware;
