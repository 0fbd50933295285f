//! User Entity Implementation
//!
//! 로컬 인증과 외부 프로바이더 인증을 모두 표현하는 사용자 엔티티입니다.
//! 생성 이후 이 서비스는 레코드를 수정하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::AuthProvider;

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 고유 ID (UUID v4)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (표시 이름)
    pub username: String,
    /// bcrypt 해시 (외부 프로바이더 사용자의 경우 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 레코드를 처음 만든 인증 방식
    pub auth_provider: AuthProvider,
    /// 프로바이더 측 사용자 식별자 (Google `sub`, LINE `userId`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_user_id: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 저장소 키로 쓰는 이메일 형태 (앞뒤 공백 제거, 소문자)
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            username,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            provider_user_id: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// 외부 프로바이더 로그인으로 처음 생성되는 사용자
    ///
    /// 비밀번호가 없으므로 `/token/` 경로로는 로그인할 수 없습니다.
    pub fn new_federated(
        email: String,
        username: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            username,
            password_hash: None,
            auth_provider,
            provider_user_id: Some(provider_user_id),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
