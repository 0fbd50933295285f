//! 학생 플랫폼 인증 게이트웨이
//!
//! 학생용 웹/모바일 앱을 위한 인증 백엔드입니다.
//! 로컬 이메일/비밀번호 계정, JWT 세션 토큰, Google ID 토큰 검증,
//! LINE 인가 코드 로그인을 하나의 사용자 저장소 위에서 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 회원가입, 본인 프로필 조회
//! - **JWT 세션**: 액세스/리프레시 토큰 쌍 발급과 액세스 토큰 갱신
//! - **Google 로그인**: JWKS 공개키로 ID 토큰 서명/audience/issuer 검증
//! - **LINE 로그인**: 인가 코드 교환 후 프로필 조회
//! - **계정 연결**: 외부 로그인은 이메일 기준으로 사용자를 조회하거나 생성
//! - **저장소 선택**: MongoDB 또는 인메모리 (`USER_STORE`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 외부 프로바이더 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← 사용자 저장소 추상화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소 구현체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use student_auth_gateway::core::AppState;
//! use student_auth_gateway::routes::configure_all_routes;
//!
//! let state = AppState::from_env().await?;
//!
//! let app = App::new()
//!     .wrap(middleware::NormalizePath::trim())
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
