//! LINE Login API 응답 모델
//!
//! - 토큰 교환: `POST https://api.line.me/oauth2/v2.1/token`
//! - 프로필 조회: `GET https://api.line.me/v2/profile`

use serde::Deserialize;

/// 토큰 교환 응답
///
/// `expires_in`은 디버그 로그에만 남기고, 액세스 토큰은 프로필 조회 한 번에만 사용합니다.
#[derive(Debug, Deserialize)]
pub struct LineTokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
}

/// 프로필 응답
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineProfile {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

impl LineProfile {
    /// 비어 있지 않은 `userId`
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_camel_case() {
        let profile: LineProfile = serde_json::from_str(
            r#"{"userId":"U123","displayName":"Alice","pictureUrl":"https://profile.line-scdn.net/x"}"#,
        )
        .unwrap();

        assert_eq!(profile.user_id(), Some("U123"));
        assert_eq!(profile.display_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_empty_user_id_is_missing() {
        let profile: LineProfile = serde_json::from_str(r#"{"userId":"","displayName":"A"}"#).unwrap();
        assert!(profile.user_id().is_none());
    }

    #[test]
    fn test_token_response_ignores_unused_fields() {
        let token: LineTokenResponse = serde_json::from_str(
            r#"{"access_token":"at","token_type":"Bearer","expires_in":2592000,"scope":"profile"}"#,
        )
        .unwrap();

        assert_eq!(token.access_token.as_deref(), Some("at"));
        assert_eq!(token.expires_in, Some(2592000));
    }
}
