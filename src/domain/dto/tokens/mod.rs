//! 세션 토큰 발급/갱신 DTO

pub mod request;
pub mod response;

pub use request::{LoginRequest, RefreshRequest};
pub use response::{AccessTokenResponse, TokenPairResponse};
