//! 알림 생성 및 대기 알림 발송 처리

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::ProcessSummary;
use crate::domain::entities::{
    EmailTemplate, Entity, Notification, NotificationEvent, NotificationStatus, SmsTemplate,
};
use crate::domain::models::audit::AuditActor;
use crate::repositories::{EntityRepository, PageQuery};
use crate::services::crud::CrudService;

use super::{render, MessageSender};

/// 알림 서비스
///
/// 저장은 알림 `CrudService`를 거치므로 검증, 이벤트 참조 확인, 감사 기록이
/// 일반 CRUD와 동일하게 적용됩니다.
pub struct NotificationService {
    notifications: Arc<CrudService<Notification>>,
    events: Arc<dyn EntityRepository<NotificationEvent>>,
    email_templates: Arc<dyn EntityRepository<EmailTemplate>>,
    sms_templates: Arc<dyn EntityRepository<SmsTemplate>>,
    sender: Arc<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(
        notifications: Arc<CrudService<Notification>>,
        events: Arc<dyn EntityRepository<NotificationEvent>>,
        email_templates: Arc<dyn EntityRepository<EmailTemplate>>,
        sms_templates: Arc<dyn EntityRepository<SmsTemplate>>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            notifications,
            events,
            email_templates,
            sms_templates,
            sender,
        }
    }

    /// 알림을 등록합니다.
    ///
    /// 이벤트에 템플릿이 있고 수신자가 있는 채널만 `PENDING`이 되고,
    /// 나머지는 `NOT_APPLICABLE`입니다.
    pub async fn send_notification(
        &self,
        mut notification: Notification,
        actor: &AuditActor,
    ) -> AppResult<Notification> {
        let event = self
            .events
            .find_by_id(&notification.event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{}: {} 항목을 찾을 수 없습니다",
                    NotificationEvent::NAME,
                    notification.event_id
                ))
            })?;

        notification.email_status =
            channel_status(event.email_template_id.as_deref(), &notification.to_email);
        notification.sms_status =
            channel_status(event.sms_template_id.as_deref(), &notification.to_phone);
        notification.failure_reason = None;
        notification.sent_at = None;

        self.notifications.create(notification, actor).await
    }

    /// 대기 중인 알림을 최대 `batch_size`건 발송합니다.
    pub async fn process_pending(&self, actor: &AuditActor, batch_size: u64) -> AppResult<ProcessSummary> {
        if batch_size == 0 {
            return Err(AppError::ValidationError(
                "batchSize는 1 이상이어야 합니다".to_string(),
            ));
        }

        let pending = self.load_pending(batch_size).await?;
        let mut summary = ProcessSummary::default();

        for notification in pending {
            let id = notification.id.clone().unwrap_or_default();
            let delivered = self.deliver(notification, &mut summary).await;

            match self.notifications.update(delivered, actor).await {
                Ok(_) => summary.processed += 1,
                Err(e) => warn!("⚠️ 알림 상태 저장 실패 ({}): {}", id, e),
            }
        }

        info!(
            "📨 대기 알림 처리 완료: processed={} sent={} failed={}",
            summary.processed, summary.sent, summary.failed
        );
        Ok(summary)
    }

    /// 이메일 또는 SMS가 `PENDING`인 알림을 오래된 순으로 가져옵니다.
    async fn load_pending(&self, batch_size: u64) -> AppResult<Vec<Notification>> {
        let pending = NotificationStatus::Pending.as_str();
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for field in ["emailStatus", "smsStatus"] {
            let mut query = PageQuery::new(0, batch_size).filter(field, pending);
            query.sort = Some("created".to_string());

            let page = self.notifications.repository().find_page(&query).await?;
            for notification in page.items.into_iter().filter(Notification::is_pending) {
                let id = notification.id.clone().unwrap_or_default();
                if seen.insert(id) {
                    result.push(notification);
                }
            }
        }

        // 두 채널 조회 결과를 합친 뒤 전체 기준으로 오래된 순
        result.sort_by_key(|n| n.tracking.created);
        result.truncate(usize::try_from(batch_size).unwrap_or(usize::MAX));
        Ok(result)
    }

    async fn deliver(&self, mut notification: Notification, summary: &mut ProcessSummary) -> Notification {
        let event = match self.events.find_by_id(&notification.event_id).await {
            Ok(event) => event,
            Err(e) => {
                warn!("⚠️ 알림 이벤트 조회 실패 ({}): {}", notification.event_id, e);
                None
            }
        };

        let mut failures = Vec::new();
        let mut any_sent = false;

        if notification.email_status == NotificationStatus::Pending {
            match self.deliver_email(event.as_ref(), &notification).await {
                Ok(()) => {
                    notification.email_status = NotificationStatus::Sent;
                    summary.sent += 1;
                    any_sent = true;
                }
                Err(reason) => {
                    notification.email_status = NotificationStatus::Failed;
                    summary.failed += 1;
                    failures.push(format!("email: {}", reason));
                }
            }
        }

        if notification.sms_status == NotificationStatus::Pending {
            match self.deliver_sms(event.as_ref(), &notification).await {
                Ok(()) => {
                    notification.sms_status = NotificationStatus::Sent;
                    summary.sent += 1;
                    any_sent = true;
                }
                Err(reason) => {
                    notification.sms_status = NotificationStatus::Failed;
                    summary.failed += 1;
                    failures.push(format!("sms: {}", reason));
                }
            }
        }

        notification.failure_reason = (!failures.is_empty()).then(|| failures.join("; "));
        if any_sent {
            notification.sent_at = Some(Utc::now());
        }
        notification
    }

    async fn deliver_email(
        &self,
        event: Option<&NotificationEvent>,
        notification: &Notification,
    ) -> Result<(), String> {
        let template_id = event
            .and_then(|e| e.email_template_id.as_deref())
            .ok_or_else(|| "이메일 템플릿이 지정되지 않았습니다".to_string())?;

        let template = self
            .email_templates
            .find_by_id(template_id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("{}: {} 항목을 찾을 수 없습니다", EmailTemplate::NAME, template_id))?;

        let subject = render(&template.subject, &notification.variables).map_err(unresolved)?;
        let body = render(&template.content, &notification.variables).map_err(unresolved)?;

        self.sender
            .send_email(&notification.to_email, &subject, &body)
            .await
            .map_err(|e| e.to_string())
    }

    async fn deliver_sms(
        &self,
        event: Option<&NotificationEvent>,
        notification: &Notification,
    ) -> Result<(), String> {
        let template_id = event
            .and_then(|e| e.sms_template_id.as_deref())
            .ok_or_else(|| "SMS 템플릿이 지정되지 않았습니다".to_string())?;

        let template = self
            .sms_templates
            .find_by_id(template_id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("{}: {} 항목을 찾을 수 없습니다", SmsTemplate::NAME, template_id))?;

        let body = render(&template.message, &notification.variables).map_err(unresolved)?;

        self.sender
            .send_sms(&notification.to_phone, &body)
            .await
            .map_err(|e| e.to_string())
    }
}

fn channel_status(template_id: Option<&str>, recipients: &[String]) -> NotificationStatus {
    match template_id {
        Some(id) if !id.is_empty() && !recipients.is_empty() => NotificationStatus::Pending,
        _ => NotificationStatus::NotApplicable,
    }
}

fn unresolved(missing: Vec<String>) -> String {
    format!("치환되지 않은 변수: {}", missing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{actor, memory_registry, sample_notification, seed_event};

    #[test]
    fn test_channel_status() {
        let to = vec!["a@example.com".to_string()];
        assert_eq!(channel_status(Some("t-1"), &to), NotificationStatus::Pending);
        assert_eq!(channel_status(None, &to), NotificationStatus::NotApplicable);
        assert_eq!(channel_status(Some("t-1"), &[]), NotificationStatus::NotApplicable);
    }

    #[tokio::test]
    async fn test_send_requires_existing_event() {
        let fixture = memory_registry();
        let result = fixture
            .registry
            .notification_service
            .send_notification(sample_notification("65f1c0c2a7b4d3e2f1a0b9c8"), &actor())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_send_sets_channel_statuses() {
        let fixture = memory_registry();
        let event_id = seed_event(&fixture.registry, true, false).await;

        let stored = fixture
            .registry
            .notification_service
            .send_notification(sample_notification(&event_id), &actor())
            .await
            .unwrap();

        assert_eq!(stored.email_status, NotificationStatus::Pending);
        assert_eq!(stored.sms_status, NotificationStatus::NotApplicable);
        assert!(stored.id.is_some());
    }

    #[tokio::test]
    async fn test_process_pending_delivers_and_marks() {
        let fixture = memory_registry();
        let service = &fixture.registry.notification_service;
        let event_id = seed_event(&fixture.registry, true, true).await;

        let stored = service
            .send_notification(sample_notification(&event_id), &actor())
            .await
            .unwrap();

        let summary = service.process_pending(&actor(), 10).await.unwrap();
        assert_eq!(summary, ProcessSummary { processed: 1, sent: 2, failed: 0 });

        let sent = fixture.sender.messages();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].body, "Hello Kim, your result is ready.");
        assert_eq!(sent[0].subject.as_deref(), Some("Result for Kim"));

        let id = stored.id.unwrap();
        let reloaded = fixture.registry.notifications.get(&id, &actor()).await.unwrap();
        assert_eq!(reloaded.email_status, NotificationStatus::Sent);
        assert_eq!(reloaded.sms_status, NotificationStatus::Sent);
        assert!(reloaded.sent_at.is_some());
        assert!(reloaded.failure_reason.is_none());

        let again = service.process_pending(&actor(), 10).await.unwrap();
        assert_eq!(again, ProcessSummary::default());
    }

    #[tokio::test]
    async fn test_process_pending_records_failures() {
        let fixture = memory_registry();
        let service = &fixture.registry.notification_service;
        let event_id = seed_event(&fixture.registry, true, true).await;

        let mut notification = sample_notification(&event_id);
        notification.variables.remove("name");
        let stored = service.send_notification(notification, &actor()).await.unwrap();

        let summary = service.process_pending(&actor(), 10).await.unwrap();
        assert_eq!(summary, ProcessSummary { processed: 1, sent: 0, failed: 2 });
        assert!(fixture.sender.messages().is_empty());

        let reloaded = fixture
            .registry
            .notifications
            .get(stored.id.as_deref().unwrap(), &actor())
            .await
            .unwrap();
        assert_eq!(reloaded.email_status, NotificationStatus::Failed);
        assert_eq!(reloaded.sms_status, NotificationStatus::Failed);
        assert!(reloaded.failure_reason.unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_process_pending_takes_oldest_across_channels() {
        use chrono::{Duration, TimeZone};

        let fixture = memory_registry();
        let service = &fixture.registry.notification_service;
        let event_id = seed_event(&fixture.registry, true, true).await;
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let repository = fixture.registry.notifications.repository();

        let mut email_only = sample_notification(&event_id);
        email_only.sms_status = NotificationStatus::NotApplicable;
        email_only.tracking.created = Some(base + Duration::minutes(5));
        let email_only = repository.insert(email_only).await.unwrap();

        let mut sms_only = sample_notification(&event_id);
        sms_only.email_status = NotificationStatus::NotApplicable;
        sms_only.tracking.created = Some(base);
        let sms_only = repository.insert(sms_only).await.unwrap();

        let summary = service.process_pending(&actor(), 1).await.unwrap();
        assert_eq!(summary, ProcessSummary { processed: 1, sent: 1, failed: 0 });

        let first = repository.find_by_id(sms_only.id.as_deref().unwrap()).await.unwrap().unwrap();
        assert_eq!(first.sms_status, NotificationStatus::Sent);
        let second = repository.find_by_id(email_only.id.as_deref().unwrap()).await.unwrap().unwrap();
        assert!(second.is_pending());
    }

    #[tokio::test]
    async fn test_process_pending_rejects_zero_batch() {
        let fixture = memory_registry();
        assert!(matches!(
            fixture.registry.notification_service.process_pending(&actor(), 0).await,
            Err(AppError::ValidationError(_))
        ));
    }
}
