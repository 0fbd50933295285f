use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::errors::AppError;

/// 검증된 액세스 토큰에서 추출된 사용자 정보
///
/// `AuthMiddleware`가 요청 extensions에 넣고, 핸들러는 인자로 받아 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어 없이 등록된 라우트에서 호출되면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ).into())),
        }
    }
}
