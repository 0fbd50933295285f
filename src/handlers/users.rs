//! # User HTTP Handlers
//!
//! 회원가입과 본인 프로필 조회를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/register/` | 로컬 계정 생성 | 201 Created / 400 |
//! | `GET` | `/profile/` | 본인 프로필 조회 (인증 필요) | 200 OK / 401 |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PostMapping("/register/")
//! public ResponseEntity<UserResponse> register(@Valid @RequestBody RegisterRequest request) { ... }
//!
//! @GetMapping("/profile/")
//! public UserResponse profile(@AuthenticationPrincipal UserDetails principal) { ... }
//! ```
//!
//! `@AuthenticationPrincipal` 대신 `AuthenticatedUser` 추출자를 인자로 받습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

/// 로컬 회원가입
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 본인 프로필 조회
///
/// `AuthMiddleware::required()`로 감싼 scope에 등록됩니다.
#[get("")]
pub async fn profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
