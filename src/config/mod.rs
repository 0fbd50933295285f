//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 각 설정 구조체는 값을 읽는 연관 함수만 제공하며, 서비스는 시작 시점에
//! 한 번 읽은 값을 생성자 인자로 전달받습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, HTTP 클라이언트 설정
//! - [`auth_config`] - JWT, Google, LINE 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 (mongodb | memory)
//! export USER_STORE="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="student_auth"
//!
//! # 세션 토큰
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 외부 프로바이더
//! export GOOGLE_CLIENT_ID="..."
//! export LINE_CHANNEL_ID="..."
//! export LINE_CHANNEL_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
