//! # 사용자 저장소 추상화
//!
//! 이메일 유니크 제약과 원자적 get-or-create를 보장하는 저장소 인터페이스입니다.

use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 사용자 저장소 trait
///
/// ## 구현 요구사항
///
/// - `email`은 저장소 수준에서 유니크해야 합니다.
/// - `get_or_create_by_email`은 동일한 이메일에 대한 동시 요청에서도
///   사용자를 정확히 하나만 만들어야 합니다. 생성 단계에서 중복 키 에러가 나면
///   에러를 반환하지 않고 기존 레코드를 다시 읽어 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 사용자가 이미 있는 경우
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 이메일로 사용자를 찾고, 없으면 `candidate`를 저장합니다.
    ///
    /// 반환값의 `bool`은 이번 호출에서 새로 만들어졌는지 여부입니다.
    /// 기존 사용자가 있으면 `candidate`의 다른 필드는 무시됩니다.
    async fn get_or_create_by_email(&self, candidate: User) -> Result<(User, bool), AppError>;
}
