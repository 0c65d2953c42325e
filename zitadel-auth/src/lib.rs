//! # zitadel-auth
//!
//! Bearer token verification for HTTP services backed by the ZITADEL
//! token introspection endpoint (RFC 7662).
//!
//! ## Components
//!
//! - **Verifier:** Holds the client credentials, the introspection URL and a pooled HTTP client.
//! - **AccessCheck:** A reusable check bound to a set of required roles, produced by [`Verifier::require`].
//! - **Middleware:** axum integration that rejects unauthenticated requests and exposes [`Claims`] to handlers.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use zitadel_auth::{Claims, Verifier, middleware::protect};
//!
//! # fn build() -> Result<Router, zitadel_auth::ConfigError> {
//! let verifier = Verifier::from_client_credentials(
//!     "client-id",
//!     "client-secret",
//!     "https://example.zitadel.cloud/oauth/v2/introspect",
//! )?;
//!
//! let admin = Router::new().route("/admin", get(|claims: Claims| async move {
//!     claims.subject().unwrap_or_default().to_string()
//! }));
//! Ok(protect(admin, verifier.require(["admin"])))
//! # }
//! ```

pub mod bearer;
pub mod builder;
pub mod claims;
pub mod config;
pub mod error;
pub mod middleware;
pub mod roles;
pub mod verifier;

pub use crate::builder::VerifierBuilder;
pub use crate::claims::{Claims, ZITADEL_ROLES_CLAIM};
pub use crate::config::VerifierConfig;
pub use crate::error::{AuthError, ConfigError, IntrospectionError};
pub use crate::roles::RequiredRoles;
pub use crate::verifier::{AccessCheck, Verifier, VerifyAccess};
