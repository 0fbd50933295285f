use serde::{Deserialize, Serialize};
use crate::domain::models::token::token::TokenPair;

/// 토큰 발급 응답 (`/token/`, `/auth/google/`, `/auth/line/`)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access: pair.access_token,
            refresh: pair.refresh_token,
        }
    }
}

/// 토큰 갱신 응답 (`/token/refresh/`)
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access: String,
}
