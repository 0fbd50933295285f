//! # 외부 프로바이더 로그인 핸들러
//!
//! | 메서드 | 경로 | 요청 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/auth/google/` | `{token}` | 400 (토큰 누락), 401 (검증 실패), 502 (JWKS 통신 실패) |
//! | `POST` | `/auth/line/` | `{code, redirect_uri}` | 400 + 단계별 메시지 |
//!
//! 두 핸들러 모두 `FederationService::login`에 프로바이더만 바꿔서 넘깁니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::tokens::TokenPairResponse;
use crate::domain::dto::users::request::{GoogleLoginRequest, LineLoginRequest};
use crate::errors::AppError;

#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let id_token = payload.into_inner().token.unwrap_or_default();
    let token_pair = state.federation_service
        .login(state.google_auth.as_ref(), &id_token)
        .await?;

    Ok(HttpResponse::Ok().json(TokenPairResponse::from(token_pair)))
}

#[post("/line")]
pub async fn line_login(
    state: web::Data<AppState>,
    payload: web::Json<LineLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let credential = payload.into_inner();
    let token_pair = state.federation_service
        .login(state.line_auth.as_ref(), &credential)
        .await?;

    Ok(HttpResponse::Ok().json(TokenPairResponse::from(token_pair)))
}
