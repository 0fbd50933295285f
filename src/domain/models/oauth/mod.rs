//! # OAuth Domain Models Module
//!
//! 외부 프로바이더가 돌려주는 데이터를 역직렬화하는 모델과, 프로바이더별 차이를
//! 제거한 [`ExternalIdentity`]를 정의합니다.
//!
//! ## 프로바이더별 입력
//!
//! | 프로바이더 | 서버가 받는 값 | 신원 확인 방법 | 이메일 |
//! |-----------|---------------|----------------|--------|
//! | Google | ID 토큰 (JWT) | JWKS 공개키로 서명/클레임 검증 | `email` 클레임 |
//! | LINE | authorization code | 토큰 교환 후 프로필 조회 | 없음 → `{userId}@line.user` |
//!
//! 두 흐름 모두 마지막에는 `ExternalIdentity`를 만들고, 이후의 사용자 조회/생성과
//! 토큰 발급은 `FederationService`가 공통으로 처리합니다.

pub mod external_identity;
pub mod google_id_token;
pub mod line;

pub use external_identity::ExternalIdentity;
pub use google_id_token::GoogleIdTokenClaims;
pub use line::{LineProfile, LineTokenResponse};
