//! Helpers for driving the full router in integration tests.

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use rune_ledger::server::{model::app::AppState, router};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Router with every route and an in-memory session layer
pub fn test_router(state: AppState) -> Router {
    router::routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

/// Sends a request through a clone of the router
pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

/// URL-encodes form fields into an `application/x-www-form-urlencoded` body
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` pair of the first `Set-Cookie` header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(|pair| pair.to_string())
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(header::LOCATION)?.to_str().ok()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Registers and logs in a user, returning the session cookie
pub async fn register_and_login(router: &Router, username: &str, password: &str) -> String {
    let body = form_body(&[("username", username), ("password", password)]);

    send(router, post_form("/register", &body, None)).await;
    let response = send(router, post_form("/login", &body, None)).await;

    session_cookie(&response).unwrap()
}
