use crate::config::ServerConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Test fixture for setting up a complete test environment with a mocked
/// ZITADEL introspection endpoint.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///     fixture
///         .add_introspection_mock(json!({ "active": true }), StatusCode::OK, 1)
///         .await;
///
///     let response = fixture.get_with_token("/me", "token").await;
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration settings
    pub config: ServerConfig,
    /// Mock server standing in for ZITADEL
    pub introspection_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with a mock introspection server and an
    /// application configured to use it.
    pub async fn new() -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let introspection_mock = MockServer::start().await;
        let config = ServerConfig::for_test_with_mock(&introspection_mock);

        let state = AppState::new(&config).expect("Failed to create test state");
        let app = create_app(state);

        Self {
            app,
            config,
            introspection_mock,
        }
    }

    /// Creates a request builder without credentials
    pub fn request_builder(&self, method: Method, uri: impl AsRef<str>) -> http::request::Builder {
        Request::builder().method(method).uri(uri.as_ref())
    }

    /// Sends an unauthenticated GET request to the specified URI.
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = self
            .request_builder(Method::GET, uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a GET request carrying `Authorization: Bearer <token>`.
    pub async fn get_with_token(&self, uri: impl AsRef<str>, token: &str) -> TestResponse {
        let request = self
            .request_builder(Method::GET, uri)
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and returns a TestResponse.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Try to parse as JSON, defaulting to empty object if parsing fails or empty body
        let json = if !body.is_empty() {
            serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}))
        } else {
            serde_json::json!({})
        };

        TestResponse {
            status,
            headers,
            json,
        }
    }

    /// Mounts the introspection endpoint answer.
    ///
    /// `expected_calls` is verified when the fixture is dropped.
    pub async fn add_introspection_mock(
        &self,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/oauth/v2/introspect"))
            .and(matchers::header(
                "content-type",
                "application/x-www-form-urlencoded",
            ))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.introspection_mock)
            .await;
    }
}

/// Response from a test request that provides convenient access to status and JSON body.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as JSON (if present and valid JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            serde_json::to_string_pretty(&self.json).unwrap_or_default()
        );
        self
    }

    /// Asserts that the response status is OK (200).
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    /// Converts the response body to the specified type.
    pub fn json_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json.clone()).expect("Failed to deserialize response JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fixture_points_at_mock() {
        let fixture = TestFixture::new().await;
        assert_eq!(
            fixture.config.zitadel.introspection_url,
            format!("{}/oauth/v2/introspect", fixture.introspection_mock.uri())
        );
        fixture
            .add_introspection_mock(json!({ "active": true }), StatusCode::OK, 1)
            .await;

        let response = fixture.get_with_token("/me", "token-1").await;
        response.assert_ok();
    }
}
