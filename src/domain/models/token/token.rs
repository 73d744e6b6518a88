//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준 클레임과 역할 목록만 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 또는 시스템 ID)
/// - `roles`: 권한 목록
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}
