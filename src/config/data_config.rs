//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 레이트 리미팅, CORS 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경 변수 원시값을 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
///
/// 잘못된 값은 경고 로그를 남깁니다.
pub fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                log::warn!("{} 파싱 실패: '{}'. 기본값 사용", key, value);
                default
            }
        },
        None => default,
    }
}

/// 환경 변수를 읽어 파싱합니다.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, env::var(key).ok(), default)
}

/// `true/1/yes/on` 형태의 불리언 플래그를 해석합니다.
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true") | Some("1") | Some("yes") | Some("on")
    )
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    /// 원시 문자열 값에서 설정을 생성합니다. 0 이하의 값은 기본값으로 대체됩니다.
    pub fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        let per_second = parse_or("RATE_LIMIT_PER_SECOND", per_second, 100u64);
        let burst_size = parse_or("RATE_LIMIT_BURST_SIZE", burst_size, 200u32);

        Self {
            per_second: if per_second == 0 { 100 } else { per_second },
            burst_size: if burst_size == 0 { 200 } else { burst_size },
        }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분). 미설정 시 로컬 개발 주소들
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        if origins.is_empty() {
            vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ]
        } else {
            origins
        }
    }
}

/// 레코드 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// MongoDB 컬렉션
    Mongo,
    /// 프로세스 메모리 (개발, 테스트용)
    Memory,
}

impl StorageKind {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageKind::Memory,
            _ => StorageKind::Mongo,
        }
    }
}

/// 데이터베이스 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `STORAGE` 환경 변수. 기본값: mongo
    pub fn storage() -> StorageKind {
        StorageKind::from_str(&env::var("STORAGE").unwrap_or_else(|_| "mongo".to_string()))
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "opencdx".to_string())
    }
}
