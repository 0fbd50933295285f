//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email_unique` 인덱스가 중복 사용자를 막는 최종 방어선입니다.
//! - **원자적 get-or-create**: `findOneAndUpdate` + `$setOnInsert` + `upsert`
//!   한 번의 연산으로 조회와 생성을 처리합니다.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, to_document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use super::user_store::UserStore;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::connect().await?;
/// let repo = MongoUserRepository::new(&database);
/// repo.ensure_indexes().await?;
///
/// let (user, created) = repo.get_or_create_by_email(candidate).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 같은 정의의 인덱스가 있으면
    /// MongoDB가 그대로 통과시킵니다.
    ///
    /// # 주의사항
    ///
    /// 기존 데이터에 중복 이메일이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

/// 유니크 인덱스 위반 여부
///
/// 일반 쓰기는 `WriteError`로, `findAndModify` 계열은 `CommandError`로 보고됩니다.
fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, user: User) -> Result<User, AppError> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn get_or_create_by_email(&self, candidate: User) -> Result<(User, bool), AppError> {
        let mut on_insert = to_document(&candidate)
            .map_err(|e| AppError::InternalError(format!("사용자 문서 직렬화 실패: {}", e)))?;
        // 필터의 email이 upsert 문서에 그대로 들어가므로 중복 지정하지 않습니다.
        on_insert.remove("email");

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection
            .find_one_and_update(
                doc! { "email": &candidate.email },
                doc! { "$setOnInsert": on_insert },
            )
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => {
                let created = user.id == candidate.id;
                Ok((user, created))
            }
            Ok(None) => Err(AppError::DatabaseError(
                "upsert 후 사용자 문서가 반환되지 않았습니다".to_string(),
            )),
            Err(e) if is_duplicate_key(&e) => {
                // 동시 upsert 경합에서 진 쪽. 먼저 생성된 레코드를 다시 읽습니다.
                debug!("get-or-create 중복 키 경합, 재조회: {}", candidate.email);
                self.find_by_email(&candidate.email)
                    .await?
                    .map(|user| (user, false))
                    .ok_or_else(|| AppError::DatabaseError(
                        "중복 키 에러 이후 사용자를 찾을 수 없습니다".to_string(),
                    ))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }
}
