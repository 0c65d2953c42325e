use axum::Json;
use axum::response::{IntoResponse, Response};
use http::header::{InvalidHeaderValue, WWW_AUTHENTICATE};
use http::{HeaderValue, StatusCode};
use serde_json::json;
use thiserror::Error;

pub const MISSING_TOKEN: &str = "Token ausente";
pub const INVALID_TOKEN: &str = "Token inválido";
pub const INACTIVE_TOKEN: &str = "Token inativo";
pub const INSUFFICIENT_SCOPES: &str = "Escopos insuficientes";

/// Rejection produced by an access check.
///
/// Every variant maps to either `401 Unauthorized` or `403 Forbidden`; the
/// response body is `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No usable bearer token in the `Authorization` header
    #[error("{}", MISSING_TOKEN)]
    MissingToken,

    /// The introspection call failed or answered with anything but `200 OK`
    #[error("{}", INVALID_TOKEN)]
    InvalidToken(#[source] IntrospectionError),

    /// The provider reports the token as not active
    #[error("{}", INACTIVE_TOKEN)]
    InactiveToken,

    /// The token is active but lacks at least one required role
    #[error("{}", INSUFFICIENT_SCOPES)]
    InsufficientScopes { missing: Vec<String> },
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken(_) | AuthError::InactiveToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::InsufficientScopes { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Human readable message returned to the client
    pub fn detail(&self) -> &'static str {
        match self {
            AuthError::MissingToken => MISSING_TOKEN,
            AuthError::InvalidToken(_) => INVALID_TOKEN,
            AuthError::InactiveToken => INACTIVE_TOKEN,
            AuthError::InsufficientScopes { .. } => INSUFFICIENT_SCOPES,
        }
    }
}

impl From<IntrospectionError> for AuthError {
    fn from(err: IntrospectionError) -> Self {
        AuthError::InvalidToken(err)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = json!({
            "detail": self.detail(),
        });
        let mut response = (status_code, Json(body)).into_response();
        if status_code == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Errors that can occur while calling the introspection endpoint.
///
/// All of them surface to clients as [`AuthError::InvalidToken`].
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to build introspection request: {0}")]
    Header(#[from] InvalidHeaderValue),
    #[error("Failed to send introspection request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Introspection request failed with status: {0}")]
    InvalidStatus(StatusCode),
    #[error("Failed to parse introspection response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while building a [`Verifier`](crate::Verifier)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to create introspection client: {0}")]
    Client(#[from] reqwest::Error),
}
