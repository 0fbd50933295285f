//! Users Entity Module
//!
//! 로컬 가입 사용자와 외부 프로바이더(Google, LINE) 사용자를 하나의 `User`로 표현합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local(
//!     "user@example.com".to_string(),
//!     "username".to_string(),
//!     hashed_password,
//! );
//!
//! // LINE 사용자 생성 (합성 이메일)
//! let line_user = User::new_federated(
//!     "U123@line.user".to_string(),
//!     "Alice".to_string(),
//!     AuthProvider::Line,
//!     "U123".to_string(),
//! );
//! ```

pub mod user;
