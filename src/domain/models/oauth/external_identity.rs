use crate::config::AuthProvider;

/// LINE 합성 이메일의 도메인 부분
pub const LINE_EMAIL_DOMAIN: &str = "line.user";

/// 프로바이더 검증을 통과한 외부 신원
///
/// `email`이 로컬 사용자 조회 키이고, `display_name`은 새 사용자를 만들 때만 사용됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalIdentity {
    pub email: String,
    pub display_name: String,
    pub provider: AuthProvider,
    pub provider_user_id: String,
}

impl ExternalIdentity {
    /// LINE 사용자 ID로 합성 이메일을 만듭니다.
    pub fn line_email(user_id: &str) -> String {
        format!("{}@{}", user_id, LINE_EMAIL_DOMAIN)
    }
}
