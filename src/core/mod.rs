//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 상태를 정의합니다.
//!
//! ## 의존성 조립
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `ApplicationContext` | [`state::AppState`] |
//! | `@Autowired` | 생성자 인자로 `Arc<T>` 전달 |
//! | `@Bean` 메서드 | `AppState::from_env` 안의 조립 코드 |
//!
//! `AppState`는 `web::Data`로 등록되어 핸들러와 인증 미들웨어가 같은 인스턴스를 사용합니다.

pub mod state;

pub use state::AppState;
