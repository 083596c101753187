#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use storeadmin_backend::{
    app::build_router,
    config::Config,
    models::user::CurrentUser,
    state::AppState,
    utils::jwt::{create_access_token, Claims},
};

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "DATABASE_URL" => Some("postgres://localhost/storeadmin_test".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Router over a pool that never connects; suitable for requests rejected
/// before any query runs.
pub fn lazy_router() -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    build_router(AppState::new(pool, config)).expect("router")
}

pub fn state_with_pool(pool: PgPool) -> AppState {
    AppState::new(pool, test_config())
}

pub fn claims_for(role: &str) -> Claims {
    let mut claims = Claims::new("user-1".into(), "alice".into(), role.into(), 1);
    claims.display_name = Some("Alice Example".into());
    claims
}

pub fn token_for(role: &str) -> String {
    create_access_token(&claims_for(role), TEST_SECRET).expect("token")
}

pub fn admin_user() -> CurrentUser {
    CurrentUser::from(&claims_for("admin"))
}

pub fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}
