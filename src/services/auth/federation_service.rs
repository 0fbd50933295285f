//! 외부 프로바이더 로그인의 공통 처리
//!
//! 프로바이더가 돌려준 신원으로 사용자를 찾거나 만들고, 세션 토큰 쌍을 발급합니다.

use std::sync::Arc;
use log::{info, warn};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::ExternalIdentity;
use crate::domain::models::token::token::TokenPair;
use crate::errors::AppError;
use crate::repositories::users::UserStore;
use super::identity_provider::IdentityProvider;
use super::token_service::TokenService;

pub struct FederationService {
    user_store: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
}

impl FederationService {
    pub fn new(user_store: Arc<dyn UserStore>, token_service: Arc<TokenService>) -> Self {
        Self { user_store, token_service }
    }

    /// 자격 증명 검증 → 사용자 get-or-create → 토큰 발급
    ///
    /// 프로바이더 검증이 실패하면 사용자 레코드는 만들어지지 않습니다.
    pub async fn login<P>(&self, provider: &P, credential: &P::Credential) -> Result<TokenPair, AppError>
    where
        P: IdentityProvider + ?Sized,
    {
        let identity = provider
            .resolve_identity(credential)
            .await
            .inspect_err(|e| warn!("{} 신원 확인 실패: {}", provider.provider().as_str(), e))?;

        self.login_with_identity(identity).await
    }

    /// 이미 검증된 외부 신원으로 로그인합니다.
    ///
    /// 같은 이메일로 두 번 호출하면 같은 사용자에 대해 새 토큰 쌍을 발급합니다.
    /// 기존 사용자의 이름이나 프로바이더 정보는 갱신하지 않습니다.
    pub async fn login_with_identity(&self, identity: ExternalIdentity) -> Result<TokenPair, AppError> {
        let provider = identity.provider;
        let candidate = User::new_federated(
            identity.email,
            identity.display_name,
            identity.provider,
            identity.provider_user_id,
        );

        let (user, created) = self.user_store.get_or_create_by_email(candidate).await?;

        if created {
            info!("🆕 {} 사용자 생성: {} ({})", provider.as_str(), user.email, user.id);
        } else {
            info!("✅ {} 로그인: {} ({})", provider.as_str(), user.email, user.id);
        }

        if !user.is_active {
            warn!("비활성 계정 로그인 시도: {}", user.id);
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        self.token_service.generate_token_pair(&user)
    }
}
