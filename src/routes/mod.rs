//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 그룹화하여 등록합니다.
//!
//! ```text
//! POST /register/        공개
//! GET  /profile/         AuthMiddleware::required()
//! POST /token/           공개
//! POST /token/refresh/   공개 (리프레시 토큰 자체가 자격 증명)
//! POST /auth/google/     공개
//! POST /auth/line/       공개
//! GET  /health           공개
//! ```
//!
//! 경로 끝의 `/`는 `NormalizePath::trim()`이 제거하므로 라우트는 슬래시 없이 등록합니다.
//! App에 `NormalizePath`를 적용하지 않으면 `/register`처럼 슬래시 없는 경로만 매칭됩니다.

use actix_web::{error, web, HttpRequest};
use serde_json::json;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_token_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::register);

    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::profile)
    );
}

fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/token")
            .service(handlers::token_handlers::obtain_token_pair)
            .service(handlers::token_handlers::refresh_access_token)
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::line_login)
    );
}

/// JSON 바디 파싱 실패도 `{"error": "..."}` 형식의 400으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            AppError::ValidationError(err.to_string()).into()
        })
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "student_auth_gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
