//! # Middlewares Module
//!
//! 요청 파이프라인에 끼워 넣는 미들웨어입니다.
//!
//! - [`AuthMiddleware`] - `Authorization: Bearer <access token>` 검증 후
//!   `AuthenticatedUser`를 요청 extensions에 주입
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/profile")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::profile),
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
