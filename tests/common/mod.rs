//! 통합 테스트 공용 도구
//!
//! 인메모리 저장소와 wiremock 서버로 `AppState`를 조립합니다.
//! Google JWKS와 LINE API는 모두 같은 mock 서버의 다른 경로로 대체됩니다.

#![allow(dead_code)]

use std::sync::Arc;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App};
use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use once_cell::sync::Lazy;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use student_auth_gateway::core::AppState;
use student_auth_gateway::repositories::users::InMemoryUserRepository;
use student_auth_gateway::routes::configure_all_routes;
use student_auth_gateway::services::auth::{GoogleAuthService, LineAuthService, LineEndpoints, TokenService};

pub const GOOGLE_CLIENT_ID: &str = "test-client.apps.googleusercontent.com";
pub const GOOGLE_KID: &str = "test-key-1";
pub const JWKS_PATH: &str = "/oauth2/v3/certs";
pub const LINE_TOKEN_PATH: &str = "/oauth2/v2.1/token";
pub const LINE_PROFILE_PATH: &str = "/v2/profile";
pub const JWT_SECRET: &str = "integration-test-secret";

/// 테스트 전체에서 공유하는 Google 서명 키 (2048비트 생성은 한 번만)
static SIGNING_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
    RsaPrivateKey::new(&mut rsa::rand_core::OsRng, 2048).expect("RSA 키 생성 실패")
});

pub struct TestContext {
    pub server: MockServer,
    pub store: Arc<InMemoryUserRepository>,
    pub state: AppState,
}

impl TestContext {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserRepository::new());
        let http = reqwest::Client::new();

        let google = GoogleAuthService::new(
            http.clone(),
            GOOGLE_CLIENT_ID.to_string(),
            format!("{}{}", server.uri(), JWKS_PATH),
            Duration::seconds(3600),
        );

        let line = LineAuthService::new(
            http,
            "1650000000".to_string(),
            "line-channel-secret".to_string(),
            LineEndpoints {
                token_uri: format!("{}{}", server.uri(), LINE_TOKEN_PATH),
                profile_uri: format!("{}{}", server.uri(), LINE_PROFILE_PATH),
            },
        );

        let token_service = Arc::new(TokenService::new(
            JWT_SECRET,
            Duration::minutes(5),
            Duration::days(1),
        ));

        let state = AppState::new(store.clone(), token_service, google, line, 4);

        Self { server, store, state }
    }

    /// JWKS 엔드포인트를 등록합니다. 호출 횟수 검증이 필요하면 `expect`를 넘깁니다.
    pub async fn mount_jwks(&self, expect: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path(JWKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(jwks()));

        match expect {
            Some(times) => mock.expect(times).mount(&self.server).await,
            None => mock.mount(&self.server).await,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(self.state.clone()))
            .configure(configure_all_routes)
    }
}

/// 테스트 서명 키의 공개키를 JWKS 형식으로 반환합니다.
pub fn jwks() -> Value {
    let public_key = SIGNING_KEY.to_public_key();
    let n = general_purpose::URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
    let e = general_purpose::URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());

    json!({
        "keys": [{
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "kid": GOOGLE_KID,
            "n": n,
            "e": e
        }]
    })
}

/// 유효한 Google ID 토큰 클레임 (1시간 후 만료)
pub fn google_claims(sub: &str, email: &str, name: &str) -> Value {
    let now = Utc::now().timestamp();
    json!({
        "iss": "https://accounts.google.com",
        "aud": GOOGLE_CLIENT_ID,
        "sub": sub,
        "email": email,
        "email_verified": true,
        "name": name,
        "iat": now,
        "exp": now + 3600
    })
}

/// 테스트 키로 RS256 서명한 ID 토큰
pub fn sign_google_token(claims: &Value) -> String {
    sign_with_kid(claims, GOOGLE_KID)
}

pub fn sign_with_kid(claims: &Value, kid: &str) -> String {
    let pem = SIGNING_KEY
        .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
        .expect("PEM 변환 실패");
    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).expect("EncodingKey 생성 실패");

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());

    encode(&header, claims, &key).expect("ID 토큰 서명 실패")
}

/// LINE 토큰 교환/프로필 엔드포인트를 성공 응답으로 등록합니다.
pub async fn mount_line_success(server: &MockServer, user_id: &str, display_name: &str) {
    Mock::given(method("POST"))
        .and(path(LINE_TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "line-access-token",
            "token_type": "Bearer",
            "expires_in": 2592000
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(LINE_PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": user_id,
            "displayName": display_name
        })))
        .mount(server)
        .await;
}
