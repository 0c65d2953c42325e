pub(crate) use crate::config::zitadel::ZitadelConfig;
use confique::Config;

pub mod zitadel;

/// Optional configuration file, read after the environment
const CONFIG_FILE: &str = "zitadel-auth.toml";

/// Main configuration structure for the server
#[derive(Debug, Config, Clone)]
pub struct ServerConfig {
    /// The port the server will listen to (default: 8080)
    #[config(env = "ZITADEL_AUTH_PORT", default = 8080)]
    pub port: u16,

    /// ZITADEL introspection configuration
    #[config(nested)]
    pub zitadel: ZitadelConfig,
}

impl ServerConfig {
    /// Loads the configuration from environment variables, falling back to
    /// `zitadel-auth.toml` in the working directory when present
    pub fn new() -> Result<Self, String> {
        ServerConfig::builder()
            .env()
            .file(CONFIG_FILE)
            .load()
            .map_err(|e| e.to_string())
    }

    #[cfg(test)]
    pub fn for_test_with_mock(introspection_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            zitadel: ZitadelConfig {
                client_id: "test-client".to_string(),
                client_secret: "test-secret".to_string(),
                introspection_url: format!("{}/oauth/v2/introspect", introspection_mock.uri()),
                roles_claim: zitadel_auth::ZITADEL_ROLES_CLAIM.to_string(),
                timeout: 5,
                connect_timeout: 2,
                admin_roles: "admin".to_string(),
            },
        }
    }
}
