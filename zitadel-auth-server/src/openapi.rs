use crate::api::{health, profile};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const PROFILE_TAG: &str = "Profile API";
pub(crate) const BEARER_SECURITY: &str = "bearer_token";

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, profile::me, profile::admin),
    modifiers(&SecurityAddon),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = PROFILE_TAG, description = "Endpoints protected by token introspection"),
    ),
    info(
        title = "ZITADEL Auth API",
        description = "Reference service protected by ZITADEL token introspection",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;

/// Registers the bearer token security scheme used by the protected endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SECURITY,
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/me"));
        assert!(paths.contains_key("/admin"));

        let components = doc.components.expect("Missing components");
        assert!(components.security_schemes.contains_key(BEARER_SECURITY));
    }
}
