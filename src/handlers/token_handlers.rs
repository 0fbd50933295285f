//! 세션 토큰 발급/갱신 핸들러

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::tokens::{AccessTokenResponse, LoginRequest, RefreshRequest, TokenPairResponse};
use crate::errors::AppError;

/// 이메일/비밀번호로 토큰 쌍 발급
///
/// 응답: `{"access": "...", "refresh": "..."}`
#[post("")]
pub async fn obtain_token_pair(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token_pair = state.token_service.generate_token_pair(&user)?;
    log::info!("✅ 로컬 로그인: {}", user.id);

    Ok(HttpResponse::Ok().json(TokenPairResponse::from(token_pair)))
}

/// 리프레시 토큰으로 새 액세스 토큰 발급
///
/// 리프레시 토큰은 교체하지 않습니다. 액세스 토큰을 넣으면 401입니다.
#[post("/refresh")]
pub async fn refresh_access_token(
    state: web::Data<AppState>,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let claims = state.token_service.verify_refresh_token(&payload.refresh)?;
    let user = state.user_service.find_active_by_id(&claims.sub).await?;
    let access = state.token_service.generate_access_token(&user)?;

    Ok(HttpResponse::Ok().json(AccessTokenResponse { access }))
}
