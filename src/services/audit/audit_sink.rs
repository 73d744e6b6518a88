//! 감사 이벤트 전송 대상

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::audit::AuditEvent;

/// 감사 이벤트 수신자
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn send(&self, event: &AuditEvent) -> AppResult<()>;
}

/// 구조화된 로그 한 줄로 감사 이벤트를 남기는 싱크
#[derive(Debug, Clone, Default)]
pub struct LogAuditSink;

#[async_trait]
impl AuditSink for LogAuditSink {
    async fn send(&self, event: &AuditEvent) -> AppResult<()> {
        let line = serde_json::to_string(event).context("감사 이벤트 직렬화 실패")?;
        info!(target: "audit", "{}", line);
        Ok(())
    }
}

/// 감사 서버로 이벤트를 POST하는 싱크
#[derive(Debug, Clone)]
pub struct HttpAuditSink {
    client: Client,
    url: String,
}

impl HttpAuditSink {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .context("감사 HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AuditSink for HttpAuditSink {
    async fn send(&self, event: &AuditEvent) -> AppResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(event)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("감사 서버 호출 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "감사 서버 응답 오류: HTTP {}",
                status.as_u16()
            )));
        }

        debug!("감사 이벤트 전송 완료: {}", event.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::audit::{AuditEventBuilder, AuditEventType};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_http_sink_posts_event() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/audit/event"))
            .and(body_partial_json(serde_json::json!({ "eventType": "CONFIG_CHANGE" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sink = HttpAuditSink::new(format!("{}/audit/event", server.uri())).unwrap();
        let event = AuditEventBuilder::new(AuditEventType::ConfigChange).build();

        assert!(sink.send(&event).await.is_ok());
    }

    #[tokio::test]
    async fn test_http_sink_reports_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sink = HttpAuditSink::new(server.uri()).unwrap();
        let event = AuditEventBuilder::new(AuditEventType::PhiAccessed).build();

        assert!(matches!(
            sink.send(&event).await,
            Err(AppError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_log_sink_accepts_event() {
        let event = AuditEventBuilder::new(AuditEventType::Communication).build();
        assert!(LogAuditSink.send(&event).await.is_ok());
    }
}
