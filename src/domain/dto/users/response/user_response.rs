use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::config::AuthProvider;

/// 사용자 프로필 응답 DTO
///
/// `/register/`와 `/profile/`이 공통으로 반환합니다. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,

    /// 인증 프로바이더 (local, google, line)
    pub auth_provider: AuthProvider,

    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            auth_provider,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            username,
            auth_provider,
            created_at,
        }
    }
}
