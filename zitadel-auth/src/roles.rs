use std::collections::BTreeSet;
use std::sync::Arc;

/// Immutable, ordered list of role names a token must all carry.
///
/// Cloning is cheap: the names are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRoles(Arc<[String]>);

impl RequiredRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    /// No role requirement; any active token passes
    pub fn none() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Required roles absent from `granted`, in declaration order
    pub fn missing_from(&self, granted: &BTreeSet<&str>) -> Vec<String> {
        self.0
            .iter()
            .filter(|role| !granted.contains(role.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for RequiredRoles {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Vec<String>> for RequiredRoles {
    fn from(roles: Vec<String>) -> Self {
        Self(Arc::from(roles))
    }
}
