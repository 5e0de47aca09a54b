use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "guard-test-secret";

/// Builds request headers carrying `Authorization: Bearer <token>`.
fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
