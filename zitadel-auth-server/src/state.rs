use crate::config::ServerConfig;
use std::sync::Arc;
use thiserror::Error;
use url::Url;
use zitadel_auth::{AccessCheck, ConfigError, Verifier};

/// Errors that can occur while initializing the application state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Invalid introspection URL: {0}")]
    InvalidIntrospectionUrl(#[from] url::ParseError),
    #[error("No admin roles configured")]
    NoAdminRoles,
    #[error("Invalid {0}: must be at least one second")]
    ZeroTimeout(&'static str),
    #[error("Failed to create verifier: {0}")]
    Verifier(#[from] ConfigError),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub verifier: Verifier,
}

impl AppState {
    /// Builds the state, validating the introspection URL, the admin roles and
    /// the timeouts up front so a misconfigured server fails at startup
    pub fn new(config: &ServerConfig) -> Result<Self, StateError> {
        let zitadel = &config.zitadel;
        let introspection_url = Url::parse(&zitadel.introspection_url)?;

        // An empty requirement would open the admin routes to any active token
        if zitadel.get_admin_roles().is_empty() {
            return Err(StateError::NoAdminRoles);
        }
        if zitadel.timeout == 0 {
            return Err(StateError::ZeroTimeout("timeout"));
        }
        if zitadel.connect_timeout == 0 {
            return Err(StateError::ZeroTimeout("connect timeout"));
        }

        let verifier = Verifier::builder(
            format!("{}:{}", zitadel.client_id, zitadel.client_secret),
            introspection_url,
        )
        .with_roles_claim(zitadel.roles_claim.clone())
        .with_timeout(zitadel.get_timeout())
        .with_connect_timeout(zitadel.get_connect_timeout())
        .build()?;

        Ok(Self {
            config: Arc::new(config.clone()),
            verifier,
        })
    }

    /// Check for routes any active token may access
    pub fn authenticated(&self) -> AccessCheck {
        self.verifier.require_authenticated()
    }

    /// Check for the admin routes
    pub fn admin(&self) -> AccessCheck {
        self.verifier.require(self.config.zitadel.get_admin_roles())
    }

    pub fn roles_claim(&self) -> &str {
        self.verifier.config().roles_claim()
    }
}
