//! # 인증 서비스 모듈
//!
//! - [`token_service`] - 세션 JWT 발급/검증
//! - [`identity_provider`] - 외부 프로바이더 공통 인터페이스
//! - [`google_auth_service`] - Google ID 토큰 검증 (JWKS)
//! - [`line_auth_service`] - LINE Login code 교환 + 프로필 조회
//! - [`federation_service`] - 외부 신원 → 사용자 get-or-create → 토큰 발급

pub mod token_service;
pub mod identity_provider;
pub mod google_auth_service;
pub mod line_auth_service;
pub mod federation_service;

pub use token_service::TokenService;
pub use identity_provider::IdentityProvider;
pub use google_auth_service::GoogleAuthService;
pub use line_auth_service::{LineAuthService, LineEndpoints};
pub use federation_service::FederationService;
