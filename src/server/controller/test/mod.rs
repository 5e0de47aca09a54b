use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::{media::fake::FakeMediaStore, token::TokenService},
    state::AppState,
};


const SECRET: &str = "controller-test-secret";

/// Router wired to an in-memory store and a fake media host.
struct TestApp {
    // Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
    db: DatabaseConnection,
    tokens: TokenService,
    media: Arc<FakeMediaStore>,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_store_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        let tokens = TokenService::new(SECRET);
        let media = Arc::new(FakeMediaStore::new());

        let state = AppState::new(db.clone(), tokens.clone(), media.clone());
        let router = router("static").with_state(state);

        Self {
            _context: context,
            db,
            tokens,
            media,
            router,
        }
    }

    /// Inserts a user and returns its id with a valid bearer token.
    async fn user(&self, admin: bool) -> (i32, String) {
        let user = factory::user::UserFactory::new(&self.db)
            .admin(admin)
            .build()
            .await
            .unwrap();
        let token = self.tokens.issue(user.id).unwrap();
        (user.id, token)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, token, None)).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }

    async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::DELETE, uri, token, None)).await
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
