//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 에러를
//! 하나의 열거형으로 모으고, 일관된 `{"error": "..."}` JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 이메일 중복 |
//! | `UpstreamFailure` | 400 Bad Request | LINE 연동 단계별 실패 (메시지 그대로 노출) |
//! | `AuthenticationError` | 401 Unauthorized | 세션 토큰 누락/만료/위조 |
//! | `InvalidCredential` | 401 Unauthorized | 외부 프로바이더 토큰 검증 실패 |
//! | `ConflictError` | 409 Conflict | 저장소 유니크 제약 위반 |
//! | `ExternalServiceError` | 502 Bad Gateway | 외부 API 통신 불가 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(data: RegisterRequest) -> Result<User, AppError> {
//!     if data.email.is_empty() {
//!         return Err(AppError::ValidationError("Email is required".to_string()));
//!     }
//!
//!     let user = user_store.insert(user).await?;
//!     Ok(user)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 핸들러가 `Result<HttpResponse, AppError>`를 반환하면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 저장소의 유니크 제약 위반을 나타냅니다. 회원가입 경로에서는
    /// `ValidationError`로 다시 매핑됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 프로바이더가 발급한 자격 증명 검증 실패 (401 Unauthorized)
    ///
    /// 서명 불일치, 만료, audience 불일치, 필수 클레임 누락 등이 해당됩니다.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// 외부 연동 단계 실패 (400 Bad Request)
    ///
    /// 메시지가 클라이언트에게 그대로 전달되므로 단계별 고정 문구만 사용합니다.
    #[error("{0}")]
    UpstreamFailure(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지
    ///
    /// 5xx 계열은 내부 정보를 숨기고 고정 문구만 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따르며,
    /// 5xx 에러의 상세 내용은 서버 로그에만 기록됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.client_message()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}
