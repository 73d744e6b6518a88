//! 공유 HTTP 채널과 호출 자격 증명

use std::fs;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Certificate, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::core::status::RpcCode;

use super::{CallSite, ClientError};

/// 모든 호출에 붙는 Bearer 토큰
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallCredentials {
    token: String,
}

impl CallCredentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// 레코드 서비스 호출 채널
///
/// 내부 `reqwest::Client`가 커넥션 풀을 가지므로 복제해서 공유합니다.
#[derive(Debug, Clone)]
pub struct OpenCdxClient {
    http: Client,
    config: ClientConfig,
}

impl OpenCdxClient {
    /// 설정으로 채널을 만듭니다.
    ///
    /// - `trust_all`: 인증서 검증 생략
    /// - `certificate_path`: PEM 번들을 신뢰 루트로 추가
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let site = CallSite::new("OpenCdxClient", 0);
        let mut builder = Client::builder().timeout(config.timeout);

        if config.trust_all {
            warn!("⚠️ 인증서 검증이 비활성화되었습니다 (OPENCDX_CLIENT_TRUST_ALL)");
            builder = builder.danger_accept_invalid_certs(true);
        } else if let Some(path) = &config.certificate_path {
            let pem = fs::read(path).map_err(|e| {
                ClientError::new(
                    RpcCode::FailedPrecondition,
                    site,
                    format!("인증서 파일을 읽을 수 없습니다 ({}): {}", path.display(), e),
                )
            })?;
            let certificate = Certificate::from_pem(&pem).map_err(|e| {
                ClientError::new(RpcCode::FailedPrecondition, site, "인증서 형식이 올바르지 않습니다")
                    .with_source(e)
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let http = builder.build().map_err(|e| {
            ClientError::new(RpcCode::Internal, site, "HTTP 클라이언트 생성 실패").with_source(e)
        })?;

        Ok(Self { http, config })
    }

    /// 요청 하나를 보내고 응답 본문을 `R`로 해석합니다.
    pub async fn call<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        credentials: &CallCredentials,
        site: CallSite<'_>,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.url(path);
        debug!("{} {} ({})", method, url, site.component);

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, credentials.header_value());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, site))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &text, site));
        }

        response.json::<R>().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::from_transport(e, site)
            } else {
                ClientError::new(RpcCode::Internal, site, format!("응답 본문을 해석할 수 없습니다: {}", e))
                    .with_source(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_credentials_header() {
        assert_eq!(CallCredentials::bearer("abc").header_value(), "Bearer abc");
    }

    #[test]
    fn test_missing_certificate_rejected() {
        let config = ClientConfig::new("https://records.local")
            .with_certificate("/nonexistent/opencdx-clients.pem");
        let error = OpenCdxClient::new(config).unwrap_err();
        assert_eq!(error.code, RpcCode::FailedPrecondition);
        assert_eq!(error.component, "OpenCdxClient");
    }

    #[test]
    fn test_trust_all_builds() {
        let config = ClientConfig::new("https://records.local")
            .with_trust_all(true)
            .with_timeout(Duration::from_secs(1));
        assert!(OpenCdxClient::new(config).is_ok());
    }
}
