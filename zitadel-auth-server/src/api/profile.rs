use crate::openapi::PROFILE_TAG;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use zitadel_auth::Claims;

/// Identity of the caller, derived from the introspection payload
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Profile {
    /// Subject (user id) of the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Preferred username, falling back to the login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Project roles granted to the token
    pub roles: Vec<String>,
    /// Full introspection payload
    pub claims: HashMap<String, serde_json::Value>,
}

impl Profile {
    fn from_claims(claims: Claims, roles_claim: &str) -> Self {
        let roles = claims
            .roles(roles_claim)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            subject: claims.subject().map(str::to_string),
            username: claims
                .preferred_username()
                .or_else(|| claims.username())
                .map(str::to_string),
            roles,
            claims: claims.into_inner().into_iter().collect(),
        }
    }
}

/// Error body of rejected requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human readable reason
    pub detail: String,
}

/// Profile of any caller holding an active token
#[utoipa::path(
    get,
    path = "/me",
    tag = PROFILE_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Token is active", body = Profile),
        (status = 401, description = "Token missing, invalid or inactive", body = ErrorDetail)
    )
)]
pub(crate) async fn me(State(state): State<AppState>, claims: Claims) -> Json<Profile> {
    Json(Profile::from_claims(claims, state.roles_claim()))
}

/// Profile of a caller holding every configured admin role
#[utoipa::path(
    get,
    path = "/admin",
    tag = PROFILE_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Token is active and carries the admin roles", body = Profile),
        (status = 401, description = "Token missing, invalid or inactive", body = ErrorDetail),
        (status = 403, description = "Token lacks a required role", body = ErrorDetail)
    )
)]
pub(crate) async fn admin(State(state): State<AppState>, claims: Claims) -> Json<Profile> {
    Json(Profile::from_claims(claims, state.roles_claim()))
}
