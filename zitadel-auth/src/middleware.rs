//! axum integration.
//!
//! [`protect`] wraps the routes of a router with an [`AccessCheck`]; handlers behind
//! it receive the token's [`Claims`] through the extractor implemented here.

use crate::claims::Claims;
use crate::error::AuthError;
use crate::verifier::{AccessCheck, VerifyAccess};
use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use http::request::Parts;

/// Applies `check` to every route of `router`.
///
/// Uses `route_layer`, so unmatched paths still answer `404` instead of `401`.
/// The router must contain at least one route.
pub fn protect<S>(router: Router<S>, check: AccessCheck) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(check, require_access))
}

/// Middleware verifying the request and storing its [`Claims`] in the request extensions
pub async fn require_access(
    State(check): State<AccessCheck>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = request.into_parts();
    let claims = check.verify(&parts.headers).await?;
    parts.extensions.insert(claims);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when the route sits behind `require_access`
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
