use crate::bearer::extract_bearer;
use crate::builder::VerifierBuilder;
use crate::claims::Claims;
use crate::config::VerifierConfig;
use crate::error::{AuthError, ConfigError, IntrospectionError};
use crate::roles::RequiredRoles;
use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION};
use http::{HeaderMap, HeaderValue, StatusCode};
use log::{debug, warn};
use reqwest::Client;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Verifies the bearer token of a request and returns its claims.
#[async_trait]
pub trait VerifyAccess: Send + Sync {
    async fn verify(&self, headers: &HeaderMap) -> Result<Claims, AuthError>;
}

/// Client of the token introspection endpoint.
///
/// A `Verifier` is created once per application and hands out [`AccessCheck`]s
/// for the role requirements of individual routes. Clones share the configuration
/// and the connection pool.
#[derive(Clone)]
pub struct Verifier {
    config: Arc<VerifierConfig>,
    client: Client,
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("config", &self.config)
            // Skip client as its Debug output is not useful here
            .finish_non_exhaustive()
    }
}

impl Verifier {
    /// Creates a verifier from a combined `client_id:client_secret` credential string
    pub fn new(
        credentials: impl Into<String>,
        introspection_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        VerifierBuilder::new(credentials, introspection_url).build()
    }

    pub fn from_client_credentials(
        client_id: &str,
        client_secret: &str,
        introspection_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        VerifierBuilder::from_client_credentials(client_id, client_secret, introspection_url)
            .build()
    }

    pub fn builder(
        credentials: impl Into<String>,
        introspection_url: impl Into<String>,
    ) -> VerifierBuilder {
        VerifierBuilder::new(credentials, introspection_url)
    }

    pub(crate) fn from_parts(config: VerifierConfig, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Returns a check that accepts active tokens carrying every role in `roles`
    pub fn require<I, S>(&self, roles: I) -> AccessCheck
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AccessCheck {
            verifier: self.clone(),
            required: RequiredRoles::new(roles),
        }
    }

    /// Returns a check that accepts any active token
    pub fn require_authenticated(&self) -> AccessCheck {
        AccessCheck {
            verifier: self.clone(),
            required: RequiredRoles::none(),
        }
    }

    /// Sends `token` to the introspection endpoint and returns the decoded payload.
    ///
    /// Only a `200 OK` answer carrying a JSON object is accepted; the `active`
    /// flag is not interpreted here.
    pub async fn introspect(&self, token: &str) -> Result<Claims, IntrospectionError> {
        let authorization = HeaderValue::from_str(&self.config.basic_authorization())?;

        debug!(
            "Sending token introspection request to: {}",
            self.config.introspection_url
        );
        let response = self
            .client
            .post(&self.config.introspection_url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&[("token", token)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(IntrospectionError::InvalidStatus(status));
        }

        let body = response.bytes().await?;
        let claims: Map<String, Value> = serde_json::from_slice(&body)?;
        Ok(Claims::new(claims))
    }
}

/// A verification bound to a fixed set of required roles.
///
/// Cheap to clone and safe to share between concurrent requests; it holds no
/// mutable state, so repeated calls with the same token produce the same outcome
/// as long as the provider's answer does not change.
#[derive(Clone, Debug)]
pub struct AccessCheck {
    verifier: Verifier,
    required: RequiredRoles,
}

impl AccessCheck {
    pub fn required_roles(&self) -> &RequiredRoles {
        &self.required
    }

    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// Runs the full check against the request headers.
    ///
    /// The provider is contacted only after a bearer token was found.
    pub async fn check(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = extract_bearer(headers)?;

        let claims = self.verifier.introspect(token).await.map_err(|e| {
            warn!("Token introspection failed: {}", e);
            AuthError::InvalidToken(e)
        })?;

        if !claims.is_active() {
            warn!("Attempt to access protected resource with an inactive token");
            return Err(AuthError::InactiveToken);
        }

        let granted = claims.roles(self.verifier.config.roles_claim());
        let missing = self.required.missing_from(&granted);
        if !missing.is_empty() {
            warn!(
                "Token of subject '{}' is missing required roles: {}",
                claims.subject().unwrap_or("unknown"),
                missing.join(", ")
            );
            return Err(AuthError::InsufficientScopes { missing });
        }

        debug!(
            "Token of subject '{}' accepted",
            claims.subject().unwrap_or("unknown")
        );
        Ok(claims)
    }
}

#[async_trait]
impl VerifyAccess for AccessCheck {
    async fn verify(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        self.check(headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> Verifier {
        Verifier::new("id:secret", "http://127.0.0.1:1/introspect")
            .expect("Failed to build verifier")
    }

    #[test]
    fn test_require_binds_roles() {
        let check = verifier().require(["admin", "user"]);
        assert_eq!(
            check.required_roles().iter().collect::<Vec<_>>(),
            vec!["admin", "user"]
        );
    }

    #[test]
    fn test_require_authenticated_has_no_roles() {
        let check = verifier().require_authenticated();
        assert!(check.required_roles().is_empty());
    }

    #[test]
    fn test_checks_share_verifier_config() {
        let verifier = verifier();
        let a = verifier.require(["admin"]);
        let b = verifier.require_authenticated();
        assert!(Arc::ptr_eq(&a.verifier.config, &b.verifier.config));
    }

    #[tokio::test]
    async fn test_missing_header_fails_without_network() {
        let check = verifier().require_authenticated();
        let result = check.verify(&HeaderMap::new()).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[test]
    fn test_access_check_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<AccessCheck>();
        assert_send_sync::<Verifier>();
    }
}
