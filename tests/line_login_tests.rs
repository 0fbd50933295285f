//! LINE 로그인 통합 테스트
//!
//! 토큰 교환과 프로필 조회 엔드포인트를 wiremock으로 대체합니다.

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header as header_matcher, method, path};
use wiremock::{Mock, ResponseTemplate};
use common::{mount_line_success, TestContext, LINE_PROFILE_PATH, LINE_TOKEN_PATH};

fn line_request() -> Value {
    json!({
        "code": "auth-code-from-line",
        "redirect_uri": "https://app.example.com/callback/line"
    })
}

async fn post_line(ctx: &TestContext, payload: Value) -> (StatusCode, Value) {
    let app = test::init_service(ctx.app()).await;
    let req = test::TestRequest::post()
        .uri("/auth/line/")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn line_login_creates_user_with_synthetic_email() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code-from-line"))
        .and(body_string_contains("client_id=1650000000"))
        .and(body_string_contains("client_secret=line-channel-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "line-access-token",
            "token_type": "Bearer",
            "expires_in": 2592000
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path(LINE_PROFILE_PATH))
        .and(header_matcher("authorization", "Bearer line-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "U123",
            "displayName": "Alice"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let app = test::init_service(ctx.app()).await;
    let req = test::TestRequest::post()
        .uri("/auth/line/")
        .set_json(line_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let tokens: Value = test::read_body_json(resp).await;
    let req = test::TestRequest::get()
        .uri("/profile/")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", tokens["access"].as_str().unwrap()),
        ))
        .to_request();
    let profile: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(profile["email"], "U123@line.user");
    assert_eq!(profile["username"], "Alice");
    assert_eq!(profile["auth_provider"], "line");
    assert_eq!(ctx.store.len(), 1);
}

#[actix_web::test]
async fn line_login_twice_reuses_the_same_user() {
    let ctx = TestContext::start().await;
    mount_line_success(&ctx.server, "U777", "Bob").await;

    let (first_status, _) = post_line(&ctx, line_request()).await;
    let (second_status, _) = post_line(&ctx, line_request()).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(ctx.store.len(), 1);
}

#[actix_web::test]
async fn line_token_exchange_failure_is_reported_verbatim() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "invalid authorization code"
        })))
        .mount(&ctx.server)
        .await;

    // 프로필 조회까지 가면 안 됩니다.
    Mock::given(method("GET"))
        .and(path(LINE_PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let (status, body) = post_line(&ctx, line_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Failed to get access token"}));
    assert!(ctx.store.is_empty());
}

#[actix_web::test]
async fn line_profile_failure_is_reported_verbatim() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "line-access-token"
        })))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path(LINE_PROFILE_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let (status, body) = post_line(&ctx, line_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Failed to get profile"}));
    assert!(ctx.store.is_empty());
}

#[actix_web::test]
async fn line_profile_without_user_id_is_invalid() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "line-access-token"
        })))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path(LINE_PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "displayName": "No Id"
        })))
        .mount(&ctx.server)
        .await;

    let (status, body) = post_line(&ctx, line_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid LINE profile"}));
    assert!(ctx.store.is_empty());
}

#[actix_web::test]
async fn line_login_without_code_fails_before_calling_line() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    for payload in [
        json!({"redirect_uri": "https://app.example.com/callback/line"}),
        json!({"code": "auth-code-from-line"}),
        json!({}),
    ] {
        let (status, body) = post_line(&ctx, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Failed to get access token"}));
    }

    assert!(ctx.store.is_empty());
}
