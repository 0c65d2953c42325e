//! ZITADEL introspection configuration

use confique::Config;
use std::fmt;
use std::time::Duration;

/// ZITADEL introspection configuration
#[derive(Config, Clone)]
pub struct ZitadelConfig {
    /// Client id of the API application registered in ZITADEL
    #[config(env = "ZITADEL_AUTH_CLIENT_ID")]
    pub client_id: String,

    /// Client secret of the API application
    #[config(env = "ZITADEL_AUTH_CLIENT_SECRET")]
    pub client_secret: String,

    /// Token introspection endpoint, e.g. https://<instance>/oauth/v2/introspect
    #[config(env = "ZITADEL_AUTH_INTROSPECTION_URL")]
    pub introspection_url: String,

    /// Claim listing the granted project roles
    #[config(
        env = "ZITADEL_AUTH_ROLES_CLAIM",
        default = "urn:zitadel:iam:org:project:roles"
    )]
    pub roles_claim: String,

    /// Timeout of an introspection request in seconds (default: 5)
    #[config(env = "ZITADEL_AUTH_TIMEOUT", default = 5)]
    pub timeout: u64,

    /// Connect timeout of an introspection request in seconds (default: 2)
    #[config(env = "ZITADEL_AUTH_CONNECT_TIMEOUT", default = 2)]
    pub connect_timeout: u64,

    /// Roles required by the admin routes
    /// Comma-separated list (default: "admin")
    #[config(env = "ZITADEL_AUTH_ADMIN_ROLES", default = "admin")]
    pub admin_roles: String,
}

impl ZitadelConfig {
    /// Get admin roles as a vector
    pub fn get_admin_roles(&self) -> Vec<String> {
        self.admin_roles
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn get_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

impl fmt::Debug for ZitadelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZitadelConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("introspection_url", &self.introspection_url)
            .field("roles_claim", &self.roles_claim)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("admin_roles", &self.admin_roles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(admin_roles: &str) -> ZitadelConfig {
        ZitadelConfig {
            client_id: "backend".to_string(),
            client_secret: "s3cret".to_string(),
            introspection_url: "http://localhost:8080/oauth/v2/introspect".to_string(),
            roles_claim: "urn:zitadel:iam:org:project:roles".to_string(),
            timeout: 5,
            connect_timeout: 2,
            admin_roles: admin_roles.to_string(),
        }
    }

    #[test]
    fn test_get_admin_roles_with_spaces() {
        let types = config(" admin , auditor ").get_admin_roles();
        assert_eq!(types, vec!["admin", "auditor"]);
    }

    #[test]
    fn test_get_admin_roles_empty() {
        assert!(config("").get_admin_roles().is_empty());
        assert!(config(" , ").get_admin_roles().is_empty());
    }

    #[test]
    fn test_timeouts() {
        let config = config("admin");
        assert_eq!(config.get_timeout(), Duration::from_secs(5));
        assert_eq!(config.get_connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", config("admin"));
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("backend"));
    }
}
