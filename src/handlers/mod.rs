//! # HTTP Handlers Module
//!
//! 요청 바디를 검증하고 서비스를 호출한 뒤 결과를 JSON으로 변환합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! `AppError::error_response`가 `{"error": "..."}` 형식으로 변환합니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`users`] | `POST /register/`, `GET /profile/` |
//! | [`token_handlers`] | `POST /token/`, `POST /token/refresh/` |
//! | [`auth`] | `POST /auth/google/`, `POST /auth/line/` |

pub mod users;
pub mod token_handlers;
pub mod auth;
