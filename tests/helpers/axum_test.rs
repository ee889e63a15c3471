// ABOUTME: In-process HTTP harness for exercising the axum router in tests
// ABOUTME: Drives requests through tower::oneshot so no listener or port is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Builds a request and executes it against a router without a server
pub struct TestRequest {
    method: Method,
    uri: String,
    json_body: Option<Value>,
}

impl TestRequest {
    /// Start a GET request
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_owned(),
            json_body: None,
        }
    }

    /// Start a POST request
    pub fn post(uri: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_owned(),
            json_body: None,
        }
    }

    /// Attach a JSON body (sets the content type)
    pub fn json(mut self, body: &Value) -> Self {
        self.json_body = Some(body.clone());
        self
    }

    /// Execute against the router and eagerly read the response body
    pub async fn send(self, app: Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        let body = match self.json_body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).expect("serialize request body"))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("build request");
        let response = app.oneshot(request).await.expect("execute request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body")
            .to_vec();

        TestResponse { status, bytes }
    }
}

/// Captured response with the body already read
pub struct TestResponse {
    status: StatusCode,
    bytes: Vec<u8>,
}

impl TestResponse {
    /// Response status as a plain u16
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON
    pub fn json_body(&self) -> Value {
        serde_json::from_slice(&self.bytes).expect("deserialize response body")
    }

    /// Body as UTF-8 text
    pub fn text(self) -> String {
        String::from_utf8(self.bytes).expect("decode response as UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, routing::post, Json};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_reads_text_body() {
        let app = Router::new().route("/ping", get(|| async { "pong" }));
        let response = TestRequest::get("/ping").send(app).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), "pong");
    }

    #[tokio::test]
    async fn test_post_json_echo() {
        let app = Router::new().route(
            "/echo",
            post(|Json(body): Json<Value>| async move { Json(json!({ "echo": body })) }),
        );
        let response = TestRequest::post("/echo")
            .json(&json!({ "goal": "5k" }))
            .send(app)
            .await;
        assert!(response.is_success());
        assert_eq!(response.json_body()["echo"]["goal"], "5k");
    }
}
