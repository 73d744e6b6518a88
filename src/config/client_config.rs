//! 클라이언트 및 감사(audit) 연동 설정
//!
//! ```bash
//! export OPENCDX_CLIENT_URL="https://localhost:8080"
//! export OPENCDX_CLIENT_PEM="certs/opencdx-clients.pem"
//! export OPENCDX_CLIENT_TRUST_ALL="false"
//! export OPENCDX_CLIENT_TIMEOUT_SECS="30"
//!
//! export AUDIT_URL="https://audit.local/audit/event"
//! export AUDIT_SYSTEM_NAME="opencdx-records"
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::data_config::{env_or, parse_flag};

/// 기본 번들 인증서 파일명
pub const DEFAULT_CLIENT_PEM: &str = "opencdx-clients.pem";

/// 원격 서비스 호출 채널 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// 대상 서버 기본 URL (끝의 `/` 제외)
    pub base_url: String,
    /// 신뢰할 루트 인증서(PEM) 경로
    pub certificate_path: Option<PathBuf>,
    /// 인증서 검증 생략 여부
    pub trust_all: bool,
    /// 요청 타임아웃
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            certificate_path: None,
            trust_all: false,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.certificate_path = Some(path.into());
        self
    }

    pub fn with_trust_all(mut self, trust_all: bool) -> Self {
        self.trust_all = trust_all;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var("OPENCDX_CLIENT_URL").unwrap_or_else(|_| "http://localhost:8080".to_string()),
        )
        .with_trust_all(parse_flag(env::var("OPENCDX_CLIENT_TRUST_ALL").ok().as_deref()))
        .with_timeout(Duration::from_secs(env_or("OPENCDX_CLIENT_TIMEOUT_SECS", 30u64)));

        if let Ok(path) = env::var("OPENCDX_CLIENT_PEM") {
            config = config.with_certificate(path);
        }

        config
    }

    /// 엔드포인트 경로를 붙인 전체 URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// 감사 이벤트 전송 설정
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    /// 감사 이벤트 수신 엔드포인트. 없으면 로그로만 기록
    pub url: Option<String>,
    /// 감사 이벤트의 `auditSource.systemInfo`
    pub system_name: String,
}

impl AuditConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("AUDIT_URL").ok().filter(|u| !u.trim().is_empty()),
            system_name: env::var("AUDIT_SYSTEM_NAME")
                .unwrap_or_else(|_| "opencdx-records".to_string()),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            url: None,
            system_name: "opencdx-records".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new("https://records.local/")
            .with_certificate(DEFAULT_CLIENT_PEM)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://records.local");
        assert_eq!(config.certificate_path, Some(PathBuf::from("opencdx-clients.pem")));
        assert!(!config.trust_all);
        assert_eq!(config.url("/allergy/list"), "https://records.local/allergy/list");
        assert_eq!(config.url("device"), "https://records.local/device");
    }

    #[test]
    fn test_audit_config_default() {
        let config = AuditConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.system_name, "opencdx-records");
    }
}
