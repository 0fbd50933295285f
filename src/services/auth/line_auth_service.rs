//! # LINE Login 인증 서비스
//!
//! LINE은 이메일을 제공하지 않으므로 세 단계를 거쳐 신원을 확인합니다.
//!
//! ```text
//! 1. POST {LINE_TOKEN_URI}    code → access_token     실패: "Failed to get access token"
//! 2. GET  {LINE_PROFILE_URI}  Bearer access_token     실패: "Failed to get profile"
//! 3. profile.userId 확인                              실패: "Invalid LINE profile"
//! ```
//!
//! 각 단계의 실패 메시지는 클라이언트에게 그대로 전달됩니다(400).
//! HTTP 상태 오류와 네트워크 오류는 구분하지 않으며, 재시도하지 않습니다.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use crate::config::{AuthProvider, LineOAuthConfig};
use crate::domain::dto::users::request::LineLoginRequest;
use crate::domain::models::oauth::{ExternalIdentity, LineProfile, LineTokenResponse};
use crate::errors::AppError;
use super::identity_provider::IdentityProvider;

pub const FAILED_ACCESS_TOKEN: &str = "Failed to get access token";
pub const FAILED_PROFILE: &str = "Failed to get profile";
pub const INVALID_PROFILE: &str = "Invalid LINE profile";

/// LINE API 엔드포인트
#[derive(Debug, Clone)]
pub struct LineEndpoints {
    pub token_uri: String,
    pub profile_uri: String,
}

impl LineEndpoints {
    pub fn from_env() -> Self {
        Self {
            token_uri: LineOAuthConfig::token_uri(),
            profile_uri: LineOAuthConfig::profile_uri(),
        }
    }
}

pub struct LineAuthService {
    http: reqwest::Client,
    channel_id: String,
    channel_secret: String,
    endpoints: LineEndpoints,
}

impl LineAuthService {
    pub fn new(
        http: reqwest::Client,
        channel_id: String,
        channel_secret: String,
        endpoints: LineEndpoints,
    ) -> Self {
        Self { http, channel_id, channel_secret, endpoints }
    }

    /// 환경 변수로 생성합니다. 채널 ID/시크릿이 없으면 실패합니다.
    pub fn from_env(http: reqwest::Client) -> Result<Self, AppError> {
        Ok(Self::new(
            http,
            LineOAuthConfig::channel_id()?,
            LineOAuthConfig::channel_secret()?,
            LineEndpoints::from_env(),
        ))
    }

    /// authorization code를 LINE 액세스 토큰으로 교환합니다.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<String, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", self.channel_id.as_str()),
            ("client_secret", self.channel_secret.as_str()),
        ];

        let response = self.http
            .post(&self.endpoints.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                warn!("LINE 토큰 요청 실패: {}", e);
                AppError::UpstreamFailure(FAILED_ACCESS_TOKEN.to_string())
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("LINE 토큰 교환 거부: {}", status);
            debug!("LINE 토큰 교환 응답: {}", body);
            return Err(AppError::UpstreamFailure(FAILED_ACCESS_TOKEN.to_string()));
        }

        let token = response
            .json::<LineTokenResponse>()
            .await
            .map_err(|e| {
                warn!("LINE 토큰 응답 파싱 실패: {}", e);
                AppError::UpstreamFailure(FAILED_ACCESS_TOKEN.to_string())
            })?;

        debug!("LINE 액세스 토큰 발급 (expires_in: {:?})", token.expires_in);

        token.access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::UpstreamFailure(FAILED_ACCESS_TOKEN.to_string()))
    }

    /// 액세스 토큰으로 LINE 프로필을 조회합니다.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<LineProfile, AppError> {
        let response = self.http
            .get(&self.endpoints.profile_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                warn!("LINE 프로필 요청 실패: {}", e);
                AppError::UpstreamFailure(FAILED_PROFILE.to_string())
            })?;

        if response.status() != StatusCode::OK {
            warn!("LINE 프로필 조회 거부: {}", response.status());
            return Err(AppError::UpstreamFailure(FAILED_PROFILE.to_string()));
        }

        response
            .json::<LineProfile>()
            .await
            .map_err(|e| {
                warn!("LINE 프로필 파싱 실패: {}", e);
                AppError::UpstreamFailure(FAILED_PROFILE.to_string())
            })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl IdentityProvider for LineAuthService {
    type Credential = LineLoginRequest;

    fn provider(&self) -> AuthProvider {
        AuthProvider::Line
    }

    async fn resolve_identity(&self, credential: &LineLoginRequest) -> Result<ExternalIdentity, AppError> {
        let (code, redirect_uri) = match (non_empty(&credential.code), non_empty(&credential.redirect_uri)) {
            (Some(code), Some(redirect_uri)) => (code, redirect_uri),
            _ => {
                debug!("LINE 로그인 요청에 code 또는 redirect_uri 누락");
                return Err(AppError::UpstreamFailure(FAILED_ACCESS_TOKEN.to_string()));
            }
        };

        let access_token = self.exchange_code(code, redirect_uri).await?;
        let profile = self.fetch_profile(&access_token).await?;

        let user_id = profile.user_id()
            .ok_or_else(|| AppError::UpstreamFailure(INVALID_PROFILE.to_string()))?;

        let display_name = non_empty(&profile.display_name).unwrap_or(user_id);

        Ok(ExternalIdentity {
            email: ExternalIdentity::line_email(user_id),
            display_name: display_name.to_string(),
            provider: AuthProvider::Line,
            provider_user_id: user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> LineAuthService {
        LineAuthService::new(
            reqwest::Client::new(),
            "1650000000".to_string(),
            "channel-secret".to_string(),
            LineEndpoints {
                token_uri: format!("{}/oauth2/v2.1/token", server.uri()),
                profile_uri: format!("{}/v2/profile", server.uri()),
            },
        )
    }

    fn credential(code: Option<&str>, redirect_uri: Option<&str>) -> LineLoginRequest {
        LineLoginRequest {
            code: code.map(str::to_string),
            redirect_uri: redirect_uri.map(str::to_string),
        }
    }

    fn upstream_message(result: Result<ExternalIdentity, AppError>) -> String {
        match result {
            Err(AppError::UpstreamFailure(msg)) => msg,
            other => panic!("Expected UpstreamFailure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_resolves_synthetic_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/token"))
            .and(body_string_contains("code=abc"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("client_secret=channel-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "line-at",
                "token_type": "Bearer",
                "expires_in": 2592000
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/profile"))
            .and(header("authorization", "Bearer line-at"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "U123",
                "displayName": "Alice"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = service(&server)
            .resolve_identity(&credential(Some("abc"), Some("https://app/cb")))
            .await
            .unwrap();

        assert_eq!(identity.email, "U123@line.user");
        assert_eq!(identity.display_name, "Alice");
        assert_eq!(identity.provider_user_id, "U123");
    }

    #[actix_web::test]
    async fn test_missing_code_fails_without_calling_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let msg = upstream_message(
            service(&server).resolve_identity(&credential(None, Some("https://app/cb"))).await,
        );
        assert_eq!(msg, FAILED_ACCESS_TOKEN);
    }

    #[actix_web::test]
    async fn test_token_response_without_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer"
            })))
            .mount(&server)
            .await;

        let msg = upstream_message(
            service(&server).resolve_identity(&credential(Some("abc"), Some("https://app/cb"))).await,
        );
        assert_eq!(msg, FAILED_ACCESS_TOKEN);
    }

    #[actix_web::test]
    async fn test_display_name_falls_back_to_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "line-at"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "U999"
            })))
            .mount(&server)
            .await;

        let identity = service(&server)
            .resolve_identity(&credential(Some("abc"), Some("https://app/cb")))
            .await
            .unwrap();

        assert_eq!(identity.display_name, "U999");
    }

    #[actix_web::test]
    async fn test_undecodable_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "line-at"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let msg = upstream_message(
            service(&server).resolve_identity(&credential(Some("abc"), Some("https://app/cb"))).await,
        );
        assert_eq!(msg, FAILED_PROFILE);
    }

    #[actix_web::test]
    async fn test_unreachable_token_endpoint() {
        let service = LineAuthService::new(
            reqwest::Client::new(),
            "id".to_string(),
            "secret".to_string(),
            LineEndpoints {
                token_uri: "http://127.0.0.1:9/token".to_string(),
                profile_uri: "http://127.0.0.1:9/profile".to_string(),
            },
        );

        let msg = upstream_message(
            service.resolve_identity(&credential(Some("abc"), Some("https://app/cb"))).await,
        );
        assert_eq!(msg, FAILED_ACCESS_TOKEN);
    }
}
