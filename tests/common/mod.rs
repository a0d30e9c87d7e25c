// Shared helpers for driving the router in-process.
#![allow(dead_code)]

use activities::database::seed;
use activities::web::build_router;
use activities::ActivityStore;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub store: ActivityStore,
    pub router: Router,
}

impl TestApp {
    /// Fresh app over the built-in seed data; no state is shared between tests.
    pub fn new() -> Self {
        Self::with_static_dir("static")
    }

    pub fn with_static_dir(static_dir: impl AsRef<std::path::Path>) -> Self {
        let store = ActivityStore::new(seed::default_activities());
        let router = build_router(store.clone(), static_dir);
        Self { store, router }
    }

    pub async fn send(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            location,
            cache_control,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri).await
    }

    pub async fn activities(&self) -> Value {
        let resp = self.get("/activities").await;
        assert_eq!(resp.status, StatusCode::OK);
        resp.json()
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let data = self.activities().await;
        data[activity]["participants"]
            .as_array()
            .expect("participants must be a list")
            .iter()
            .map(|p| p.as_str().expect("participant must be a string").to_owned())
            .collect()
    }

    pub async fn signup(&self, activity: &str, email: &str) -> TestResponse {
        self.send(Method::POST, &signup_uri(activity, email)).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> TestResponse {
        self.send(Method::DELETE, &signup_uri(activity, email)).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub cache_control: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Failed to deserialize JSON response")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Failed to decode response as UTF-8")
    }

    pub fn detail(&self) -> String {
        self.json()["detail"]
            .as_str()
            .expect("error body must carry a detail string")
            .to_lowercase()
    }

    pub fn message(&self) -> String {
        self.json()["message"]
            .as_str()
            .expect("success body must carry a message string")
            .to_owned()
    }
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}
