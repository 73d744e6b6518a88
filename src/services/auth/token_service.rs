//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256 서명 JWT의 발급과 검증, `Authorization` 헤더 파싱을 담당합니다.
//! 레코드 서비스는 토큰을 직접 발급하지 않고 검증만 하지만, 테스트와 내부
//! 도구에서 쓸 수 있도록 발급 기능도 제공합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시점에 한 번 읽어 보관합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 주체와 역할로 액세스 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token("user-1", vec!["admin".to_string()])?;
    /// ```
    pub fn issue_token(&self, subject: &str, roles: Vec<String>) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: subject.to_string(),
            roles,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 형식 또는 서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `"Bearer {token}"` 헤더에서 토큰 부분만 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}
