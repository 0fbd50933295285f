//! # Repositories Module
//!
//! 데이터 접근 계층입니다. 서비스는 [`users::UserStore`] trait에만 의존하고,
//! 실행 시점에 MongoDB 또는 인메모리 구현체가 주입됩니다.
//!
//! ```text
//! UserService / FederationService
//!          │  Arc<dyn UserStore>
//!          ▼
//! ┌────────────────────┬──────────────────────────┐
//! │ MongoUserRepository │ InMemoryUserRepository  │
//! │ (USER_STORE=mongodb)│ (USER_STORE=memory, 테스트) │
//! └────────────────────┴──────────────────────────┘
//! ```

pub mod users;
