//! JWT 세션 토큰 클레임과 토큰 쌍
//!
//! RFC 7519 표준 클레임에 토큰 용도(`token_type`)를 더해 액세스 토큰과
//! 리프레시 토큰을 구분합니다.
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// API 접근용 단기 토큰
    Access,
    /// 액세스 토큰 재발급용 장기 토큰
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 이메일 등은 포함하지 않습니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `token_type`: `access` 또는 `refresh`
/// - `auth_provider`: 사용자 레코드를 만든 인증 방식
/// - `jti`: 토큰 고유 ID (UUID v4). 같은 초에 발급된 토큰도 서로 다른 값이 됩니다.
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub token_type: TokenType,
    pub auth_provider: AuthProvider,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
