//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | Spring Security | 이 시스템 | 역할 |
//! |-----------------|-----------|------|
//! | `@RequestBody SignUpDto` | `RegisterRequest` | 회원가입 요청 |
//! | `@ResponseBody UserDto` | `UserResponse` | 사용자 프로필 응답 |
//! | `OAuth2LoginAuthenticationToken` | `GoogleLoginRequest`, `LineLoginRequest` | 외부 프로바이더 자격 증명 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
