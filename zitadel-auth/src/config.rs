use crate::claims::ZITADEL_ROLES_CLAIM;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::time::Duration;

/// Default timeout for a whole introspection request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default timeout for establishing the connection to the provider
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Settings of a [`Verifier`](crate::Verifier), immutable once built.
///
/// The credential string and the URL are kept verbatim; they are not validated
/// until the first introspection call.
#[derive(Clone)]
pub struct VerifierConfig {
    /// Client credentials in the form `client_id:client_secret`
    pub(crate) credentials: String,
    /// URL of the provider's introspection endpoint
    pub(crate) introspection_url: String,
    /// Claim holding the granted roles
    pub(crate) roles_claim: String,
    pub(crate) timeout: Duration,
    pub(crate) connect_timeout: Duration,
}

impl VerifierConfig {
    pub fn new(credentials: impl Into<String>, introspection_url: impl Into<String>) -> Self {
        Self {
            credentials: credentials.into(),
            introspection_url: introspection_url.into(),
            roles_claim: ZITADEL_ROLES_CLAIM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn introspection_url(&self) -> &str {
        &self.introspection_url
    }

    pub fn roles_claim(&self) -> &str {
        &self.roles_claim
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Value of the `Authorization` header sent to the introspection endpoint
    pub(crate) fn basic_authorization(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.credentials.as_bytes()))
    }
}

impl fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("introspection_url", &self.introspection_url)
            .field("roles_claim", &self.roles_claim)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            // Credentials are never printed
            .finish_non_exhaustive()
    }
}
