//! # 사용자 관리 서비스 구현
//!
//! 로컬 회원가입, 이메일/비밀번호 인증, 프로필 조회를 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     UserService                       │
//! │  ┌──────────────┐  ┌────────────────┐  ┌───────────┐  │
//! │  │ Registration │  │ Authentication │  │  Lookup   │  │
//! │  │ • 중복 확인   │  │ • bcrypt 검증   │  │ • By ID   │  │
//! │  │ • bcrypt 해시 │  │ • 계정 상태     │  │ • 활성 확인 │  │
//! │  └──────────────┘  └────────────────┘  └───────────┘  │
//! └───────────────────────────────────────────────────────┘
//!                           │ Arc<dyn UserStore>
//!                           ▼
//!            MongoUserRepository / InMemoryUserRepository
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig`)
//! - **동일한 실패 메시지**: 이메일 없음과 비밀번호 불일치를 구분하지 않습니다.
//! - **외부 프로바이더 계정**: 비밀번호가 없으므로 `/token/` 로그인이 불가능합니다.

use std::sync::Arc;
use bcrypt::hash;
use log::{debug, info, warn};
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use crate::repositories::users::UserStore;

const INVALID_LOGIN: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct UserService {
    user_store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { user_store, bcrypt_cost }
    }

    /// 새 로컬 사용자를 등록합니다.
    ///
    /// 검증된 요청을 받는다고 가정합니다 (`RegisterRequest::validate`는 핸들러 책임).
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 사용 중인 이메일 (사전 확인과 저장소 유니크 제약 모두)
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();
        let email = User::normalize_email(&request.email);

        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(duplicate_email());
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(email, request.username, password_hash);

        let created = self.user_store
            .insert(user)
            .await
            .map_err(|e| match e {
                // 사전 확인과 저장 사이에 같은 이메일이 먼저 저장된 경우
                AppError::ConflictError(_) => duplicate_email(),
                other => other,
            })?;

        info!("✅ 회원가입 완료: {} ({:?})", created.id, start_time.elapsed());
        Ok(created)
    }

    /// 이메일/비밀번호로 사용자를 인증합니다.
    ///
    /// 실패 사유와 관계없이 `AuthenticationError`(401)를 반환합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.user_store
            .find_by_email(&User::normalize_email(email))
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_LOGIN.to_string()))?;

        let Some(password_hash) = user.password_hash.as_deref() else {
            warn!("비밀번호 없는 {} 계정으로 로그인 시도: {}", user.auth_provider.as_str(), user.id);
            return Err(AppError::AuthenticationError(
                "외부 로그인 계정입니다. 해당 프로바이더로 로그인해주세요".to_string(),
            ));
        };

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            warn!("비밀번호 불일치: {}", user.id);
            return Err(AppError::AuthenticationError(INVALID_LOGIN.to_string()));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        Ok(user)
    }

    /// 인증된 사용자 본인의 프로필을 조회합니다.
    ///
    /// 토큰은 유효하지만 사용자가 없는 경우 `AuthenticationError`입니다.
    pub async fn get_profile(&self, user_id: &str) -> Result<User, AppError> {
        self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 토큰 갱신 시 사용자 상태를 확인합니다.
    pub async fn find_active_by_id(&self, user_id: &str) -> Result<User, AppError> {
        let user = self.get_profile(user_id).await?;
        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }
        Ok(user)
    }
}

fn duplicate_email() -> AppError {
    AppError::ValidationError("email: 이미 사용 중인 이메일입니다".to_string())
}
