//! 회원가입 요청 DTO
//!
//! 새로운 로컬 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `POST /register/` 요청 바디
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자명 (1-150자, 공백만으로 구성 불가)
    #[validate(length(min = 1, max = 150, message = "사용자명은 1-150자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 구성할 수 없습니다".into()));
    }
    Ok(())
}
