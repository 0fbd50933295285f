//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 타입으로 변환하고 검증합니다.
//!
//! ```rust,ignore
//! #[post("/register")]
//! async fn register(
//!     state: web::Data<AppState>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let user = state.user_service.register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(UserResponse::from(user)))
//! }
//! ```
//!
//! LINE 요청의 필드는 `Option`으로 받습니다. 누락 시 검증 에러가 아니라
//! 토큰 교환 단계 실패(`"Failed to get access token"`)로 응답해야 하기 때문입니다.

pub mod register_request;
pub mod auth_request;

pub use register_request::RegisterRequest;
pub use auth_request::{GoogleLoginRequest, LineLoginRequest};
