//! Google ID 토큰 클레임
//!
//! 서명과 `aud`/`iss`/`exp` 검증은 `jsonwebtoken::Validation`이 담당하므로
//! 여기서는 신원 확인에 필요한 클레임만 역직렬화합니다.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIdTokenClaims {
    /// Google 계정 고유 ID
    pub sub: String,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
}

impl GoogleIdTokenClaims {
    /// 비어 있지 않은 이메일
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    /// 표시 이름. `name` 클레임이 없거나 비어 있으면 이메일을 사용합니다.
    pub fn display_name_or<'a>(&'a self, email: &'a str) -> &'a str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(email)
    }
}
