use crate::error::AuthError;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use log::warn;

const BEARER_PREFIX: &str = "bearer ";

/// Extracts the bearer token from the `Authorization` header.
///
/// The scheme is matched case-insensitively. A missing header, a value that is not
/// visible ASCII, a different scheme or an empty token all yield
/// [`AuthError::MissingToken`].
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(header) = headers.get(AUTHORIZATION) else {
        warn!("Attempt to access protected resource without providing 'Authorization' header");
        return Err(AuthError::MissingToken);
    };

    let value = header.to_str().map_err(|e| {
        warn!("Failed to parse Authorization header to string: {}", e);
        AuthError::MissingToken
    })?;

    let token = value
        .get(..BEARER_PREFIX.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
        .map(|_| value[BEARER_PREFIX.len()..].trim())
        .ok_or_else(|| {
            warn!("Invalid Authorization header format, missing 'Bearer ' prefix");
            AuthError::MissingToken
        })?;

    if token.is_empty() {
        warn!("Authorization header carries an empty bearer token");
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
