//! 외부 프로바이더 로그인 요청 DTO
//!
//! 클라이언트가 프로바이더에서 받아 온 자격 증명을 그대로 전달합니다.
use serde::Deserialize;
use validator::Validate;

/// `POST /auth/google/` 요청 바디
///
/// `token`은 Google Sign-In이 발급한 ID 토큰(JWT)입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(
        required(message = "ID 토큰이 필요합니다"),
        length(min = 1, message = "ID 토큰이 필요합니다")
    )]
    pub token: Option<String>,
}

/// `POST /auth/line/` 요청 바디
///
/// LINE 인가 화면에서 돌아온 authorization code와 그때 사용한 redirect URI입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LineLoginRequest {
    pub code: Option<String>,
    pub redirect_uri: Option<String>,
}
