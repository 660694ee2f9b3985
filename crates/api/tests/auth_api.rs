//! HTTP-level integration tests for login and the authentication gate.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, post_json};
use sqlx::PgPool;

/// Successful login returns 200 with an access token and resolved role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "adminlogin", Some("admin")).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "adminlogin", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "adminlogin");
    assert_eq!(json["user"]["email"], "adminlogin@test.com");
    assert_eq!(json["user"]["role"], "admin");
}

/// A user with no role row logs in with the default role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_without_role_row_defaults_to_user(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "plainuser", None).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "plainuser", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["role"], "user");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", None).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401 with the same message as a
/// wrong password, so usernames cannot be enumerated.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "realuser", None).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let ghost_json = body_json(response).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "realuser", "password": "wrong" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrongpw_json = body_json(response).await;

    assert_eq!(ghost_json["error"], wrongpw_json["error"]);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive", None).await;
    voltbill_db::repositories::UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A request with no Authorization header returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_auth_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/bills?consumer_id=C001").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A request with a garbage bearer token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/bills?consumer_id=C001", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A malformed Authorization header (not `Bearer <token>`) returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_bearer_auth_header(pool: PgPool) {
    let (user, _password) = create_test_user(&pool, "basicauth", None).await;
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/bills?consumer_id=C001")
        .header("authorization", format!("Basic {}", user.id))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
