//! 인메모리 사용자 저장소
//!
//! 로컬 개발(`USER_STORE=memory`)과 테스트에서 사용합니다. 프로세스가 끝나면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use super::user_store::UserStore;

/// 이메일을 키로 하는 `HashMap` 저장소
///
/// 쓰기 연산은 하나의 쓰기 락 안에서 조회와 삽입을 함께 처리하므로
/// 같은 이메일에 대한 동시 get-or-create도 한 건만 생성됩니다.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.contains_key(&user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn get_or_create_by_email(&self, candidate: User) -> Result<(User, bool), AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let mut created = false;
        let user = users
            .entry(candidate.email.clone())
            .or_insert_with(|| {
                created = true;
                candidate
            })
            .clone();
        Ok((user, created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::config::AuthProvider;

    fn line_user(user_id: &str, name: &str) -> User {
        User::new_federated(
            format!("{}@line.user", user_id),
            name.to_string(),
            AuthProvider::Line,
            user_id.to_string(),
        )
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        let first = User::new_local("kim@example.com".into(), "kim".into(), "h".into());
        let second = User::new_local("kim@example.com".into(), "other".into(), "h".into());

        repo.insert(first).await.unwrap();
        let result = repo.insert(second).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_or_create_returns_existing() {
        let repo = InMemoryUserRepository::new();

        let (first, created_first) = repo.get_or_create_by_email(line_user("U1", "Alice")).await.unwrap();
        let (second, created_second) = repo.get_or_create_by_email(line_user("U1", "Renamed")).await.unwrap();

        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.id, second.id);
        assert_eq!(second.username, "Alice");
    }

    #[actix_web::test]
    async fn test_concurrent_get_or_create_creates_one_user() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let tasks = (0..16).map(|_| {
            let repo = repo.clone();
            async move { repo.get_or_create_by_email(line_user("U42", "Bob")).await }
        });
        let results = futures_util::future::join_all(tasks).await;

        let ids: std::collections::HashSet<String> = results
            .into_iter()
            .map(|r| r.unwrap().0.id)
            .collect();

        assert_eq!(ids.len(), 1);
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(User::new_local("a@example.com".into(), "a".into(), "h".into())).await.unwrap();

        assert_eq!(repo.find_by_id(&user.id).await.unwrap(), Some(user));
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }
}
