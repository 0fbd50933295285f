//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티를 정의합니다. 현재는 [`users::user::User`] 하나뿐입니다.
//!
//! ## 저장 형식
//!
//! - `_id`: UUID v4 문자열. MongoDB와 인메모리 저장소가 같은 식별자 체계를 공유합니다.
//! - `email`: 유니크. 외부 프로바이더 로그인 시 사용자 조회 키로 사용됩니다.
//! - `created_at`: `chrono::DateTime<Utc>` (RFC 3339 문자열로 직렬화)
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_local(email, username, password_hash);
//! let stored = user_store.insert(user).await?;
//! ```

pub mod users;
