//! 외부 신원 프로바이더 추상화

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ExternalIdentity;
use crate::errors::AppError;

/// 프로바이더가 발급한 자격 증명을 검증된 외부 신원으로 바꾸는 trait
///
/// 구현체는 프로바이더별 검증 절차만 담당합니다. 사용자 조회/생성과 세션 토큰 발급은
/// `FederationService`가 모든 프로바이더에 대해 같은 방식으로 처리합니다.
///
/// | 구현체 | `Credential` | 실패 시 |
/// |--------|--------------|---------|
/// | `GoogleAuthService` | ID 토큰 문자열 | `InvalidCredential` (401) |
/// | `LineAuthService` | `{code, redirect_uri}` | 단계별 `UpstreamFailure` (400) |
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    type Credential: Send + Sync;

    fn provider(&self) -> AuthProvider;

    async fn resolve_identity(&self, credential: &Self::Credential) -> Result<ExternalIdentity, AppError>;
}
