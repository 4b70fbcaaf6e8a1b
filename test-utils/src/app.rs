//! In-process HTTP client for exercising an Axum router in tests.
//!
//! Requests are dispatched with `tower::ServiceExt::oneshot`, so no TCP port is bound.
//! Failures to build a request or read a response panic, failing the test.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an Axum `Router`.
///
/// # Example
///
/// ```rust,ignore
/// let app = TestApp::new(router::app(AppState::new(db.clone())));
///
/// let response = app.get("/api/topics").send().await;
/// assert_eq!(response.status, StatusCode::OK);
/// ```
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Creates a `TestApp` from an assembled router with state applied.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    pub fn patch(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::DELETE, path)
    }

    /// Starts building a request with an arbitrary HTTP method.
    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, method, path)
    }
}

/// Builder for constructing and sending a test HTTP request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    content_type: Option<&'static str>,
    body: Option<Vec<u8>>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            content_type: None,
            body: None,
        }
    }

    /// Sets the request body as JSON. Also sets Content-Type to `application/json`.
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(body).expect("failed to serialize request body"));
        self.content_type = Some("application/json");
        self
    }

    /// Sets a raw request body without a Content-Type header.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sends the request and returns the collected response.
    pub async fn send(self) -> TestResponse {
        let body = match self.body {
            Some(b) => Body::from(b),
            None => Body::empty(),
        };

        let mut builder = Request::builder().method(self.method).uri(&self.path);

        if let Some(content_type) = self.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        let request = builder.body(body).expect("failed to build request");

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse { status, body }
    }
}

/// Response captured by [`TestRequest::send`].
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    /// Parses the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not valid JSON")
    }

    /// Returns the `msg` field of an error body.
    pub fn msg(&self) -> String {
        self.json()["msg"].as_str().unwrap_or_default().to_string()
    }
}
