pub(crate) mod health;
pub(crate) mod profile;

use crate::state::AppState;
use axum::{routing::get, Router};
use zitadel_auth::middleware::protect;

/// Combines all API routes into a single router
pub(super) fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(protected_routes(state))
}

/// Creates a router for routes that require an introspected token
fn protected_routes(state: &AppState) -> Router<AppState> {
    let authenticated = protect(
        Router::new().route("/me", get(profile::me)),
        state.authenticated(),
    );
    let admin = protect(
        Router::new().route("/admin", get(profile::admin)),
        state.admin(),
    );

    authenticated.merge(admin)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestFixture;
    use http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let fixture = TestFixture::new().await;
        fixture.add_introspection_mock(json!({}), StatusCode::OK, 0).await;

        let response = fixture.get("/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_scalar_docs_are_public() {
        let fixture = TestFixture::new().await;
        fixture.add_introspection_mock(json!({}), StatusCode::OK, 0).await;

        let response = fixture.get("/scalar").await;
        response.assert_ok();
    }
}
