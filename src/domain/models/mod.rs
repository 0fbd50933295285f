//! # Domain Models Module
//!
//! 저장되지 않는 값 객체들을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증 미들웨어가 요청 컨텍스트에 주입하는 사용자 정보
//! - [`token`] - 세션 토큰 클레임과 토큰 쌍
//! - [`oauth`] - 외부 프로바이더 응답 모델과 정규화된 외부 신원
//!
//! ```text
//! Google ID 토큰 ─┐
//!                 ├─▶ ExternalIdentity ─▶ User (get-or-create) ─▶ TokenPair
//! LINE profile  ─┘
//! ```

pub mod auth;
pub mod token;
pub mod oauth;
