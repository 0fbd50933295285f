//! # Data Transfer Objects Module
//!
//! HTTP 요청/응답 바디를 정의합니다. 엔티티를 그대로 노출하지 않고
//! 필요한 필드만 담은 DTO로 변환하여 비밀번호 해시 같은 내부 정보가 응답에
//! 섞이지 않도록 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/   # 회원가입, Google/LINE 로그인 요청
//! │   └── response/  # 사용자 프로필 응답
//! └── tokens/
//!     ├── request    # 토큰 발급/갱신 요청
//!     └── response   # {access, refresh} / {access}
//! ```
//!
//! ## 검증
//!
//! 요청 DTO는 `validator::Validate`를 derive 하며 핸들러에서
//! `payload.validate()?`로 검증합니다. `ValidationErrors`는 `AppError::ValidationError`
//! (400)로 변환됩니다.

pub mod users;
pub mod tokens;

pub use users::*;
pub use tokens::*;
