use crate::config::VerifierConfig;
use crate::error::ConfigError;
use crate::verifier::Verifier;
use reqwest::Client;
use std::time::Duration;

/// A builder for configuring a [`Verifier`].
pub struct VerifierBuilder {
    config: VerifierConfig,
    client: Option<Client>,
}

impl VerifierBuilder {
    /// Creates a builder from a combined `client_id:client_secret` credential string
    /// and the introspection endpoint URL.
    pub fn new(credentials: impl Into<String>, introspection_url: impl Into<String>) -> Self {
        Self {
            config: VerifierConfig::new(credentials, introspection_url),
            client: None,
        }
    }

    /// Creates a builder from separate client id and secret
    pub fn from_client_credentials(
        client_id: &str,
        client_secret: &str,
        introspection_url: impl Into<String>,
    ) -> Self {
        Self::new(format!("{client_id}:{client_secret}"), introspection_url)
    }

    /// Overrides the claim holding the granted roles
    /// (default: `urn:zitadel:iam:org:project:roles`).
    pub fn with_roles_claim(mut self, claim: impl Into<String>) -> Self {
        self.config.roles_claim = claim.into();
        self
    }

    /// Sets the timeout of a whole introspection request (default: 5 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the connect timeout (default: 2 seconds).
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Uses an existing HTTP client instead of creating one.
    /// The timeouts of this builder are not applied to a supplied client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Verifier, ConfigError> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.config.timeout)
                .connect_timeout(self.config.connect_timeout)
                // Configure connection pool
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(Some(Duration::from_secs(90)))
                .build()?,
        };
        Ok(Verifier::from_parts(self.config, client))
    }
}
