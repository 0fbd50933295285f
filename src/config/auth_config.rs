//! # Authentication Configuration Module
//!
//! JWT 세션 토큰, Google ID 토큰 검증, LINE Login 연동에 필요한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google (ID 토큰 검증)
//! ```bash
//! export GOOGLE_CLIENT_ID="1234-abcd.apps.googleusercontent.com"   # 기대 audience
//! export GOOGLE_JWKS_URI="https://www.googleapis.com/oauth2/v3/certs" # 선택
//! export GOOGLE_JWKS_CACHE_SECONDS="3600"                            # 선택
//! ```
//!
//! ### LINE Login
//! ```bash
//! export LINE_CHANNEL_ID="1650000000"
//! export LINE_CHANNEL_SECRET="line-channel-secret"
//! export LINE_TOKEN_URI="https://api.line.me/oauth2/v2.1/token"      # 선택
//! export LINE_PROFILE_URI="https://api.line.me/v2/profile"           # 선택
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"   # Development/Test 외 환경에서 필수
//! export JWT_ACCESS_TOKEN_MINUTES="5"
//! export JWT_REFRESH_TOKEN_DAYS="1"
//! ```

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

/// 개발/테스트 환경에서만 사용하는 JWT 서명 키
const DEV_JWT_SECRET: &str = "dev-only-jwt-secret";

fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", name)))
}

fn positive_i64(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Google ID 토큰 검증 설정
///
/// 클라이언트(웹/앱)가 Google Sign-In으로 받은 ID 토큰을 서버가 검증할 때 사용합니다.
/// 서버는 authorization code 교환을 하지 않으므로 client secret은 필요하지 않습니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID (ID 토큰의 기대 `aud` 값)
    ///
    /// # Errors
    ///
    /// `GOOGLE_CLIENT_ID`가 설정되지 않은 경우 `AppError::InternalError`
    pub fn client_id() -> Result<String, AppError> {
        required("GOOGLE_CLIENT_ID")
    }

    /// Google 공개키 세트(JWKS) 엔드포인트
    pub fn jwks_uri() -> String {
        env::var("GOOGLE_JWKS_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/certs".to_string())
    }

    /// 허용하는 `iss` 값 목록
    pub fn issuers() -> Vec<String> {
        vec![
            "accounts.google.com".to_string(),
            "https://accounts.google.com".to_string(),
        ]
    }

    /// JWKS 캐시 유지 시간(초). 기본값: 3600
    pub fn jwks_cache_seconds() -> i64 {
        positive_i64("GOOGLE_JWKS_CACHE_SECONDS", 3600)
    }
}

/// LINE Login 채널 설정
///
/// LINE은 이메일을 제공하지 않으므로 authorization code → access token → profile
/// 순서로 호출하여 `userId`를 얻습니다.
pub struct LineOAuthConfig;

impl LineOAuthConfig {
    /// LINE Login 채널 ID (`client_id`)
    pub fn channel_id() -> Result<String, AppError> {
        required("LINE_CHANNEL_ID")
    }

    /// LINE Login 채널 시크릿 (`client_secret`)
    ///
    /// 로그에 출력하지 마세요.
    pub fn channel_secret() -> Result<String, AppError> {
        required("LINE_CHANNEL_SECRET")
    }

    /// 토큰 교환 엔드포인트
    pub fn token_uri() -> String {
        env::var("LINE_TOKEN_URI")
            .unwrap_or_else(|_| "https://api.line.me/oauth2/v2.1/token".to_string())
    }

    /// 프로필 조회 엔드포인트
    pub fn profile_uri() -> String {
        env::var("LINE_PROFILE_URI")
            .unwrap_or_else(|_| "https://api.line.me/v2/profile".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정
///
/// 액세스 토큰은 짧게(기본 5분), 리프레시 토큰은 길게(기본 1일) 유지합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// Development/Test 외의 환경에서 `JWT_SECRET`이 없으면 `AppError::InternalError`
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for(&Environment::current(), required("JWT_SECRET").ok())
    }

    /// 실행 환경과 설정값으로 서명 키를 결정합니다.
    ///
    /// 값이 없을 때 개발용 키로 대체하는 것은 Development/Test 환경뿐입니다.
    pub fn secret_for(environment: &Environment, configured: Option<String>) -> Result<String, AppError> {
        match (configured, environment) {
            (Some(secret), _) => Ok(secret),
            (None, Environment::Development | Environment::Test) => {
                log::warn!("JWT_SECRET not set, using development key ({:?})", environment);
                Ok(DEV_JWT_SECRET.to_string())
            }
            (None, _) => Err(AppError::InternalError(format!(
                "JWT_SECRET must be set in {:?} environment", environment
            ))),
        }
    }

    /// 액세스 토큰 만료 시간(분). 기본값: 5
    pub fn access_token_minutes() -> i64 {
        positive_i64("JWT_ACCESS_TOKEN_MINUTES", 5)
    }

    /// 리프레시 토큰 만료 시간(일). 기본값: 1
    pub fn refresh_token_days() -> i64 {
        positive_i64("JWT_REFRESH_TOKEN_DAYS", 1)
    }
}

/// 사용자 레코드를 처음 만든 인증 방식
///
/// 토큰 클레임과 사용자 엔티티에 소문자 문자열(`"local"`, `"google"`, `"line"`)로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 이메일/패스워드 직접 가입
    Local,
    /// Google ID 토큰
    Google,
    /// LINE Login
    Line,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다 (대소문자 무관).
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "line" => Ok(AuthProvider::Line),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Line => "line",
        }
    }
}
