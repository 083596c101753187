use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod support;
use support::{get, lazy_router, response_json, token_for, TEST_SECRET};

#[tokio::test]
async fn health_is_public() {
    let response = lazy_router()
        .oneshot(get("/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn me_requires_a_token() {
    let response = lazy_router()
        .oneshot(get("/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_rejects_tokens_signed_with_another_secret() {
    let claims = support::claims_for("admin");
    let forged =
        storeadmin_backend::utils::jwt::create_access_token(&claims, "not-the-secret").unwrap();
    assert_ne!(TEST_SECRET, "not-the-secret");
    let response = lazy_router()
        .oneshot(get("/api/auth/me", Some(&forged)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_reports_admin_flag_for_admin_role() {
    let token = token_for("admin");
    let response = lazy_router()
        .oneshot(get("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["id"], "user-1");
    assert_eq!(json["display_name"], "Alice Example");
    assert_eq!(json["is_admin"], true);
}

#[tokio::test]
async fn me_reports_non_admin_for_other_roles() {
    let token = token_for("editor");
    let response = lazy_router()
        .oneshot(get("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["is_admin"], false);
}

#[tokio::test]
async fn me_accepts_access_token_cookie() {
    let token = token_for("admin");
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::COOKIE, format!("access_token={}", token))
        .body(Body::empty())
        .unwrap();
    let response = lazy_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    for path in ["/api/admin/prices", "/api/admin/site-config"] {
        let response = lazy_router().oneshot(get(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }
}

#[tokio::test]
async fn admin_routes_reject_non_admin_roles() {
    let token = token_for("editor");
    for path in ["/api/admin/prices", "/api/admin/site-config"] {
        let response = lazy_router()
            .oneshot(get(path, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", path);
    }
}
