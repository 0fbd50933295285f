//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 한 번 생성되어 `AppState` 안에서 `Arc`로 공유됩니다.
//! 저장소와 HTTP 클라이언트는 생성자 인자로 주입되므로 테스트에서는
//! 인메모리 저장소와 mock 서버 주소를 그대로 넣을 수 있습니다.
//!
//! # Features
//!
//! - 로컬 회원가입 / 이메일+비밀번호 인증
//! - JWT 액세스/리프레시 토큰 발급 및 검증
//! - Google ID 토큰, LINE Login 기반 외부 로그인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = Arc::new(TokenService::from_env()?);
//! let user_service = UserService::new(user_store.clone(), PasswordConfig::bcrypt_cost());
//! ```

pub mod users;
pub mod auth;
