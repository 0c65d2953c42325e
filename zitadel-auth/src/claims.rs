use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Claim under which ZITADEL lists the project roles granted to a token
pub const ZITADEL_ROLES_CLAIM: &str = "urn:zitadel:iam:org:project:roles";

const RESOURCE_OWNER_ID_CLAIM: &str = "urn:zitadel:iam:user:resourceowner:id";

/// Introspection payload of an accepted token.
///
/// Wraps the JSON object returned by the provider unchanged, so every claim is
/// available to handlers through [`Claims::get`]. Accessors are provided for the
/// standard RFC 7662 fields and the ZITADEL specific ones used most often.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Whether the provider reports the token as active.
    /// Anything but a JSON `true` counts as inactive.
    pub fn is_active(&self) -> bool {
        self.0.get("active").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Role names granted to the token: the keys of the object stored under `claim`.
    /// A missing claim or a claim that is not an object grants nothing.
    pub fn roles(&self, claim: &str) -> BTreeSet<&str> {
        self.0
            .get(claim)
            .and_then(Value::as_object)
            .map(|roles| roles.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_role(&self, claim: &str, role: &str) -> bool {
        self.0
            .get(claim)
            .and_then(Value::as_object)
            .is_some_and(|roles| roles.contains_key(role))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn subject(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    pub fn client_id(&self) -> Option<&str> {
        self.str_claim("client_id")
    }

    pub fn username(&self) -> Option<&str> {
        self.str_claim("username")
    }

    pub fn preferred_username(&self) -> Option<&str> {
        self.str_claim("preferred_username")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_claim("email")
    }

    pub fn issuer(&self) -> Option<&str> {
        self.str_claim("iss")
    }

    pub fn resource_owner_id(&self) -> Option<&str> {
        self.str_claim(RESOURCE_OWNER_ID_CLAIM)
    }

    /// Scopes of the token, split on whitespace
    pub fn scopes(&self) -> Vec<&str> {
        self.str_claim("scope")
            .map(|scope| scope.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Expiration timestamp (Unix time)
    pub fn expires_at(&self) -> Option<u64> {
        self.0.get("exp").and_then(Value::as_u64)
    }

    /// Issued at timestamp (Unix time)
    pub fn issued_at(&self) -> Option<u64> {
        self.0.get("iat").and_then(Value::as_u64)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn str_claim(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}
