//! JWT 세션 토큰 관리 서비스 구현
//!
//! HS256 서명의 액세스 토큰과 리프레시 토큰을 발급하고 검증합니다.
//! 토큰은 서버에 저장하지 않으며, 유효성은 서명과 만료 시간으로만 판단합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::{TokenClaims, TokenPair, TokenType};
use crate::errors::AppError;

/// 세션 토큰 발급/검증 서비스
///
/// ## 토큰 구분
///
/// 액세스 토큰과 리프레시 토큰은 같은 키로 서명되지만 `token_type` 클레임이 다릅니다.
/// [`verify_access_token`](Self::verify_access_token)은 리프레시 토큰을,
/// [`verify_refresh_token`](Self::verify_refresh_token)은 액세스 토큰을 거부합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// `JWT_SECRET`, `JWT_ACCESS_TOKEN_MINUTES`, `JWT_REFRESH_TOKEN_DAYS`로 생성합니다.
    ///
    /// # Errors
    ///
    /// 운영 환경에서 `JWT_SECRET`이 없으면 `AppError::InternalError`
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(
            &JwtConfig::secret()?,
            Duration::minutes(JwtConfig::access_token_minutes()),
            Duration::days(JwtConfig::refresh_token_days()),
        ))
    }

    fn issue(&self, user: &User, token_type: TokenType, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + ttl;

        let claims = TokenClaims {
            sub: user.id.clone(),
            token_type,
            auth_provider: user.auth_provider,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenType::Access, self.access_ttl)
    }

    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenType::Refresh, self.refresh_ttl)
    }

    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 검증 실패는 모두 `AuthenticationError`(401)입니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_typed(token, TokenType::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_typed(token, TokenType::Refresh)
    }

    fn verify_typed(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AppError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != expected {
            return Err(AppError::AuthenticationError("토큰 용도가 올바르지 않습니다".to_string()));
        }
        Ok(claims)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
