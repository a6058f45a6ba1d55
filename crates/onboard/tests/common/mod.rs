//! Test utilities and common setup.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use onboard::api::{self, AppState, CorsState};
use onboard::db::Database;
use onboard::profile::{ProfileRepository, ProfileService};

/// A router over an in-memory database, plus the pool for row counting.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Create a test application with all services initialized.
pub async fn test_app() -> TestApp {
    let db = Database::in_memory().await.unwrap();

    let profile_repo = ProfileRepository::new(db.pool().clone());
    let profile_service = ProfileService::new(profile_repo);

    let cors = CorsState {
        allowed_origins: vec!["https://survey.example.com".to_string()],
        dev_mode: false,
    };

    let state = AppState::new(profile_service, cors);
    TestApp {
        router: api::create_router(state),
        pool: db.pool().clone(),
    }
}

impl TestApp {
    /// Send a request and return the status with the decoded JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Number of rows in `table`.
    pub async fn count(&self, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap();
        n
    }

    /// Total interest, skill and goal rows.
    pub async fn child_rows(&self) -> i64 {
        self.count("interests").await + self.count("skills").await + self.count("goals").await
    }
}
