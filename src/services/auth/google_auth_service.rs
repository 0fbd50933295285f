//! # Google ID 토큰 인증 서비스
//!
//! 클라이언트가 Google Sign-In으로 받은 ID 토큰을 검증하여 사용자의 신원을 확인합니다.
//! 서버는 authorization code를 교환하지 않고, Google이 공개한 키(JWKS)로 서명만 검증합니다.
//!
//! ## 검증 순서
//!
//! ```text
//! ID 토큰 ──▶ header 디코딩 (alg=RS256, kid 필수)
//!        ──▶ kid로 JWKS에서 공개키 조회 (캐시 → 미스 시 1회 재조회)
//!        ──▶ 서명 + exp + aud(GOOGLE_CLIENT_ID) + iss 검증
//!        ──▶ email 클레임 필수, name 없으면 email 사용
//! ```
//!
//! ## JWKS 캐시
//!
//! Google은 서명 키를 주기적으로 교체합니다. 캐시된 키 세트는
//! `GOOGLE_JWKS_CACHE_SECONDS` 동안 재사용하며, 캐시에 없는 `kid`가 들어오면
//! 만료 전이라도 한 번 다시 받아옵니다.
//!
//! 재조회는 마지막 조회 후 [`JWKS_REFETCH_FLOOR_SECONDS`]가 지나야 허용되고,
//! 동시에 들어온 요청들은 하나의 조회 결과를 기다려 함께 사용합니다.
//! 임의의 `kid`를 담은 토큰으로는 Google 호출 횟수를 늘릴 수 없습니다.

use std::sync::RwLock;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use futures_util::lock::Mutex;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use jsonwebtoken::jwk::{Jwk, JwkSet};
use log::{debug, info, warn};
use reqwest::StatusCode;
use crate::config::{AuthProvider, GoogleOAuthConfig};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::{ExternalIdentity, GoogleIdTokenClaims};
use crate::errors::AppError;
use super::identity_provider::IdentityProvider;

/// 알 수 없는 `kid`로 JWKS를 다시 받아오기 전 최소 대기 시간(초)
pub const JWKS_REFETCH_FLOOR_SECONDS: i64 = 60;

struct CachedJwks {
    keys: JwkSet,
    fetched_at: DateTime<Utc>,
}

pub struct GoogleAuthService {
    http: reqwest::Client,
    client_id: String,
    jwks_uri: String,
    issuers: Vec<String>,
    cache_ttl: Duration,
    jwks_cache: RwLock<Option<CachedJwks>>,
    refetch_floor: Duration,
    fetch_lock: Mutex<()>,
}

impl GoogleAuthService {
    pub fn new(http: reqwest::Client, client_id: String, jwks_uri: String, cache_ttl: Duration) -> Self {
        Self {
            http,
            client_id,
            jwks_uri,
            issuers: GoogleOAuthConfig::issuers(),
            cache_ttl,
            jwks_cache: RwLock::new(None),
            refetch_floor: Duration::seconds(JWKS_REFETCH_FLOOR_SECONDS),
            fetch_lock: Mutex::new(()),
        }
    }

    /// 환경 변수로 생성합니다. `GOOGLE_CLIENT_ID`가 없으면 실패합니다.
    pub fn from_env(http: reqwest::Client) -> Result<Self, AppError> {
        Ok(Self::new(
            http,
            GoogleOAuthConfig::client_id()?,
            GoogleOAuthConfig::jwks_uri(),
            Duration::seconds(GoogleOAuthConfig::jwks_cache_seconds()),
        ))
    }

    /// ID 토큰의 서명과 표준 클레임을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredential` - 형식 오류, 알 수 없는 키, 서명 불일치, 만료, aud/iss 불일치
    /// * `AppError::ExternalServiceError` - JWKS 엔드포인트 통신 실패
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleIdTokenClaims, AppError> {
        let header = decode_header(id_token)
            .map_err(|e| AppError::InvalidCredential(format!("ID 토큰 형식 오류: {}", e)))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::InvalidCredential(format!(
                "지원하지 않는 서명 알고리즘: {:?}", header.alg
            )));
        }

        let kid = header.kid
            .ok_or_else(|| AppError::InvalidCredential("ID 토큰에 kid가 없습니다".to_string()))?;

        let jwk = self.signing_key(&kid).await?;
        let decoding_key = DecodingKey::from_jwk(&jwk)
            .map_err(|e| AppError::InvalidCredential(format!("공개키 변환 실패: {}", e)))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.client_id]);
        validation.set_issuer(&self.issuers);
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);

        decode::<GoogleIdTokenClaims>(id_token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => "토큰이 만료되었습니다",
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => "audience가 일치하지 않습니다",
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => "issuer가 일치하지 않습니다",
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => "서명이 유효하지 않습니다",
                    _ => "토큰 검증 실패",
                };
                debug!("Google ID 토큰 검증 실패: {}", e);
                AppError::InvalidCredential(reason.to_string())
            })
    }

    async fn signing_key(&self, kid: &str) -> Result<Jwk, AppError> {
        if let Some(jwk) = self.cached_key(kid) {
            return Ok(jwk);
        }

        let _fetch_guard = self.fetch_lock.lock().await;

        // 락을 기다리는 동안 다른 요청이 이미 받아왔을 수 있습니다.
        if let Some(jwk) = self.cached_key(kid) {
            return Ok(jwk);
        }

        if self.fetched_within_floor() {
            debug!("JWKS 재조회 제한 중, 알 수 없는 kid 거부: {}", kid);
            return Err(unknown_key(kid));
        }

        let keys = self.fetch_jwks().await?;
        let jwk = keys.find(kid).cloned();

        if let Ok(mut cache) = self.jwks_cache.write() {
            *cache = Some(CachedJwks { keys, fetched_at: Utc::now() });
        }

        jwk.ok_or_else(|| unknown_key(kid))
    }

    /// 캐시가 유효하고 마지막 조회가 재조회 하한보다 최근인지 확인합니다.
    fn fetched_within_floor(&self) -> bool {
        let Ok(cache) = self.jwks_cache.read() else {
            return false;
        };

        cache.as_ref().is_some_and(|cached| {
            let age = Utc::now() - cached.fetched_at;
            age < self.cache_ttl && age < self.refetch_floor
        })
    }

    /// 만료되지 않은 캐시에서 `kid`를 찾습니다. 없으면 재조회가 필요하다는 뜻입니다.
    fn cached_key(&self, kid: &str) -> Option<Jwk> {
        let cache = self.jwks_cache.read().ok()?;
        let cached = cache.as_ref()?;

        if Utc::now() - cached.fetched_at >= self.cache_ttl {
            return None;
        }

        cached.keys.find(kid).cloned()
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AppError> {
        let response = self.http
            .get(&self.jwks_uri)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google JWKS 요청 실패: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::ExternalServiceError(format!(
                "Google JWKS 응답 오류: {}", response.status()
            )));
        }

        let keys = response
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google JWKS 파싱 실패: {}", e)))?;

        info!("🔑 Google JWKS 갱신: {}개 키", keys.keys.len());
        Ok(keys)
    }
}

fn unknown_key(kid: &str) -> AppError {
    AppError::InvalidCredential(format!("알 수 없는 서명 키: {}", kid))
}

#[async_trait]
impl IdentityProvider for GoogleAuthService {
    type Credential = String;

    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn resolve_identity(&self, id_token: &String) -> Result<ExternalIdentity, AppError> {
        let claims = self.verify_id_token(id_token).await?;

        let email = claims.email()
            .ok_or_else(|| AppError::InvalidCredential("email 클레임이 없습니다".to_string()))?;

        if claims.email_verified == Some(false) {
            warn!("미인증 Google 이메일로 로그인 시도: {}", email);
            return Err(AppError::InvalidCredential("이메일이 인증되지 않았습니다".to_string()));
        }

        Ok(ExternalIdentity {
            email: User::normalize_email(email),
            display_name: claims.display_name_or(email).to_string(),
            provider: AuthProvider::Google,
            provider_user_id: claims.sub.clone(),
        })
    }
}
