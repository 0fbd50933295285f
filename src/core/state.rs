//! 애플리케이션 상태 조립

use std::sync::Arc;
use log::info;
use crate::config::{DatabaseConfig, HttpClientConfig, PasswordConfig, UserStoreBackend};
use crate::db::Database;
use crate::errors::AppError;
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use crate::services::auth::{FederationService, GoogleAuthService, LineAuthService, TokenService};
use crate::services::users::UserService;

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
///
/// 모든 필드가 `Arc`이므로 워커마다 복제해도 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub federation_service: Arc<FederationService>,
    pub google_auth: Arc<GoogleAuthService>,
    pub line_auth: Arc<LineAuthService>,
}

impl AppState {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        google_auth: GoogleAuthService,
        line_auth: LineAuthService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_store.clone(), bcrypt_cost)),
            federation_service: Arc::new(FederationService::new(user_store, token_service.clone())),
            token_service,
            google_auth: Arc::new(google_auth),
            line_auth: Arc::new(line_auth),
        }
    }

    /// 환경 변수로 전체 상태를 조립합니다.
    ///
    /// 필수 설정(`GOOGLE_CLIENT_ID`, `LINE_CHANNEL_ID`, `LINE_CHANNEL_SECRET`,
    /// 운영 환경의 `JWT_SECRET`)이 없거나
    /// MongoDB에 연결할 수 없으면 실패합니다.
    pub async fn from_env() -> Result<Self, AppError> {
        let http = build_http_client()?;
        let user_store = initialize_user_store().await?;

        Ok(Self::new(
            user_store,
            Arc::new(TokenService::from_env()?),
            GoogleAuthService::from_env(http.clone())?,
            LineAuthService::from_env(http)?,
            PasswordConfig::bcrypt_cost(),
        ))
    }
}

/// 외부 API 호출용 공유 HTTP 클라이언트
pub fn build_http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(HttpClientConfig::timeout())
        .build()
        .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))
}

async fn initialize_user_store() -> Result<Arc<dyn UserStore>, AppError> {
    match DatabaseConfig::backend() {
        UserStoreBackend::MongoDb => {
            let database = Database::connect().await?;
            let repo = MongoUserRepository::new(&database);
            repo.ensure_indexes().await?;
            Ok(Arc::new(repo))
        }
        UserStoreBackend::Memory => {
            info!("💾 인메모리 사용자 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}
