//! # Authentication Configuration Module
//!
//! JWT 서명 키와 만료 시간 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

use super::data_config::env_or;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그가 출력됩니다.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "opencdx-dev-secret-key".to_string()
        })
    }

    /// 액세스 토큰 만료 시간 (시간 단위). 기본값 24시간
    pub fn expiration_hours() -> i64 {
        env_or("JWT_EXPIRATION_HOURS", 24)
    }
}
