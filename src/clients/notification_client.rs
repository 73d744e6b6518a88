//! 알림 발송 클라이언트

use reqwest::Method;

use crate::domain::dto::{ProcessRequest, ProcessSummary};
use crate::domain::entities::Notification;

use super::{CallCredentials, CallSite, ClientError, OpenCdxClient};

const COMPONENT: &str = "NotificationClient";

/// `/notification` 발송/처리 엔드포인트 클라이언트
///
/// 조회와 삭제는 `EntityClient<Notification>`을 사용합니다.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    channel: OpenCdxClient,
}

impl NotificationClient {
    pub fn new(channel: OpenCdxClient) -> Self {
        Self { channel }
    }

    /// 알림을 대기 상태로 등록합니다.
    pub async fn send_notification(
        &self,
        notification: &Notification,
        credentials: &CallCredentials,
    ) -> Result<Notification, ClientError> {
        self.channel
            .call(
                Method::POST,
                "/notification",
                Some(notification),
                credentials,
                CallSite::new(COMPONENT, 1),
            )
            .await
    }

    /// 대기 중인 알림 발송을 요청합니다. `admin` 역할이 필요합니다.
    pub async fn process_pending(
        &self,
        request: &ProcessRequest,
        credentials: &CallCredentials,
    ) -> Result<ProcessSummary, ClientError> {
        self.channel
            .call(
                Method::POST,
                "/notification/process",
                Some(request),
                credentials,
                CallSite::new(COMPONENT, 2),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;
    use crate::core::status::RpcCode;
    use crate::domain::entities::NotificationStatus;
    use crate::test_support::sample_notification;

    fn client(server: &MockServer) -> NotificationClient {
        NotificationClient::new(OpenCdxClient::new(ClientConfig::new(server.uri())).unwrap())
    }

    #[tokio::test]
    async fn test_send_notification() {
        let server = MockServer::start().await;
        let mut stored = sample_notification("65f1c0c2a7b4d3e2f1a0b9c1");
        stored.id = Some("65f1c0c2a7b4d3e2f1a0b9c8".to_string());

        Mock::given(method("POST"))
            .and(path("/notification"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .mount(&server)
            .await;

        let sent = client(&server)
            .send_notification(
                &sample_notification("65f1c0c2a7b4d3e2f1a0b9c1"),
                &CallCredentials::bearer("t"),
            )
            .await
            .unwrap();
        assert_eq!(sent.id, stored.id);
        assert_eq!(sent.email_status, NotificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_process_pending_denied() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notification/process"))
            .and(body_json(serde_json::json!({ "batchSize": 5 })))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": "Forbidden",
                "code": 7,
                "status": "PERMISSION_DENIED",
                "message": "admin 역할이 필요합니다",
                "details": []
            })))
            .mount(&server)
            .await;

        let error = client(&server)
            .process_pending(&ProcessRequest { batch_size: 5 }, &CallCredentials::bearer("t"))
            .await
            .unwrap_err();
        assert_eq!(error.code, RpcCode::PermissionDenied);
        assert_eq!(error.component, "NotificationClient");
        assert_eq!(error.error_code, 2);
    }

    #[tokio::test]
    async fn test_process_pending_summary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notification/process"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "processed": 2, "sent": 3, "failed": 1
            })))
            .mount(&server)
            .await;

        let summary = client(&server)
            .process_pending(&ProcessRequest::default(), &CallCredentials::bearer("t"))
            .await
            .unwrap();
        assert_eq!(summary, ProcessSummary { processed: 2, sent: 3, failed: 1 });
    }
}
