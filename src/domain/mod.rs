//! # Domain Layer Module
//!
//! 도메인 계층은 저장소와 HTTP 계층 사이에서 주고받는 타입들을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 객체 (User)
//! ├── dto       - HTTP 요청/응답 바디
//! └── models    - 토큰 클레임, 인증 컨텍스트, 외부 프로바이더 응답
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 저장되는 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `OAuth2User`, `Authentication` | `models` 모듈 | 인증 관련 값 객체 |
//! | `@Valid` | `validator::Validate` | 입력 검증 |
//!
//! 의존 방향은 항상 `dto → entities` 입니다. 엔티티는 DTO를 알지 못하며,
//! 응답 변환은 `From<User> for UserResponse`처럼 DTO 쪽에서 구현합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
