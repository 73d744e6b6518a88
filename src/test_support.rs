//! 테스트 공용 픽스처
//!
//! 메모리 저장소로 조립한 레지스트리, 감사 이벤트/발송 메시지를 모아두는
//! 기록용 싱크, 샘플 엔티티 생성 함수를 제공합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistry;
use crate::domain::entities::*;
use crate::domain::models::audit::{AuditActor, AuditEvent};
use crate::repositories::{MemoryProvider, RepositoryProvider};
use crate::services::audit::{AuditService, AuditSink};
use crate::services::auth::TokenService;
use crate::services::communications::MessageSender;
use crate::services::crud::CrudService;

pub const TEST_SECRET: &str = "opencdx-test-secret";

/// 받은 감사 이벤트를 보관하는 싱크
#[derive(Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<AuditEvent>>,
    fail: bool,
}

impl RecordingAuditSink {
    /// 항상 전송 실패를 반환하는 싱크
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AuditSink for RecordingAuditSink {
    async fn send(&self, event: &AuditEvent) -> AppResult<()> {
        if self.fail {
            return Err(AppError::ExternalServiceError("audit sink down".to_string()));
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
        Ok(())
    }
}

/// 발송된 메시지 한 건
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub channel: &'static str,
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub body: String,
}

/// 발송 요청을 보관하는 채널
#[derive(Default)]
pub struct RecordingSender {
    messages: Mutex<Vec<SentMessage>>,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<SentMessage> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn push(&self, message: SentMessage) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_email(&self, to: &[String], subject: &str, body: &str) -> AppResult<()> {
        self.push(SentMessage {
            channel: "email",
            to: to.to_vec(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
        });
        Ok(())
    }

    async fn send_sms(&self, to: &[String], body: &str) -> AppResult<()> {
        self.push(SentMessage {
            channel: "sms",
            to: to.to_vec(),
            subject: None,
            body: body.to_string(),
        });
        Ok(())
    }
}

/// 메모리 저장소 레지스트리와 기록용 싱크
pub struct TestFixture {
    pub registry: ServiceRegistry,
    pub audit: Arc<RecordingAuditSink>,
    pub sender: Arc<RecordingSender>,
}

pub fn memory_registry() -> TestFixture {
    let audit = Arc::new(RecordingAuditSink::default());
    let sender = Arc::new(RecordingSender::default());
    let registry = ServiceRegistry::build(
        &MemoryProvider,
        Arc::new(AuditService::new(audit.clone(), "records-test")),
        Arc::new(TokenService::new(TEST_SECRET, 1)),
        sender.clone(),
    );

    TestFixture {
        registry,
        audit,
        sender,
    }
}

/// 가드 없는 메모리 CRUD 서비스
pub fn crud_service<E: Entity>() -> (CrudService<E>, Arc<RecordingAuditSink>) {
    let sink = Arc::new(RecordingAuditSink::default());
    let audit = Arc::new(AuditService::new(sink.clone(), "records-test"));
    (CrudService::new(MemoryProvider.repository::<E>(), audit), sink)
}

/// `Authorization` 헤더 값
pub fn bearer(fixture: &TestFixture, roles: &[&str]) -> String {
    let roles = roles.iter().map(|r| r.to_string()).collect();
    let token = fixture
        .registry
        .tokens
        .issue_token("test-user", roles)
        .expect("token");
    format!("Bearer {}", token)
}

pub fn actor() -> AuditActor {
    AuditActor::new("test-user")
}

pub fn sample_allergy(patient_id: &str) -> Allergy {
    Allergy {
        id: None,
        patient_id: patient_id.to_string(),
        national_health_id: None,
        allergen: "Peanut".to_string(),
        reaction: Some("Hives".to_string()),
        severity: AllergySeverity::Moderate,
        occurrence_date: None,
        is_ongoing: true,
        notes: None,
        tracking: Tracking::default(),
    }
}

pub fn sample_country(name: &str, iso_code: &str) -> Country {
    Country {
        id: None,
        name: name.to_string(),
        iso_code: iso_code.to_string(),
        tracking: Tracking::default(),
    }
}

fn sample_address(country_id: &str) -> Address {
    Address {
        address1: Some("1 Main St".to_string()),
        address2: None,
        city: "Seoul".to_string(),
        state: None,
        postal_code: None,
        country_id: country_id.to_string(),
    }
}

pub fn sample_manufacturer(name: &str, country_id: &str) -> Manufacturer {
    Manufacturer {
        id: None,
        name: name.to_string(),
        address: Some(sample_address(country_id)),
        contact: None,
        email: None,
        phone: None,
        website: None,
        description: None,
        tracking: Tracking::default(),
    }
}

pub fn sample_vendor(name: &str, country_id: &str) -> Vendor {
    Vendor {
        id: None,
        name: name.to_string(),
        address: Some(sample_address(country_id)),
        contact: None,
        email: None,
        phone: None,
        website: None,
        description: None,
        tracking: Tracking::default(),
    }
}

pub fn sample_device(manufacturer_id: &str, vendor_id: &str) -> Device {
    Device {
        id: None,
        device_type: "ANALYZER".to_string(),
        model: "X-1".to_string(),
        manufacturer_id: manufacturer_id.to_string(),
        vendor_id: vendor_id.to_string(),
        manufacturer_country_id: None,
        name: None,
        batch_number: Some("10".to_string()),
        serial_number: None,
        test_type_id: None,
        manufacture_date: None,
        expiry_date: None,
        sensitivity: None,
        specificity: None,
        tracking: Tracking::default(),
    }
}

pub fn sample_notification(event_id: &str) -> Notification {
    Notification {
        id: None,
        event_id: event_id.to_string(),
        patient_id: Some("p-1".to_string()),
        national_health_id: None,
        to_email: vec!["patient@example.com".to_string()],
        to_phone: vec!["+821012345678".to_string()],
        variables: HashMap::from([("name".to_string(), "Kim".to_string())]),
        email_status: NotificationStatus::Pending,
        sms_status: NotificationStatus::Pending,
        failure_reason: None,
        sent_at: None,
        tracking: Tracking::default(),
    }
}

/// 템플릿과 알림 이벤트를 만들고 이벤트 ID를 반환합니다.
pub async fn seed_event(registry: &ServiceRegistry, email: bool, sms: bool) -> String {
    let actor = actor();

    let email_template_id = if email {
        let template = EmailTemplate {
            id: None,
            template_type: TemplateType::Notification,
            subject: "Result for ${name}".to_string(),
            content: "Hello ${name}, your result is ready.".to_string(),
            variables: vec!["name".to_string()],
            tracking: Tracking::default(),
        };
        registry
            .email_templates
            .create(template, &actor)
            .await
            .expect("email template")
            .id
    } else {
        None
    };

    let sms_template_id = if sms {
        let template = SmsTemplate {
            id: None,
            template_type: TemplateType::Notification,
            message: "Hello ${name}, your result is ready.".to_string(),
            variables: vec!["name".to_string()],
            tracking: Tracking::default(),
        };
        registry
            .sms_templates
            .create(template, &actor)
            .await
            .expect("sms template")
            .id
    } else {
        None
    };

    let event = NotificationEvent {
        id: None,
        event_name: "Test Result".to_string(),
        event_description: None,
        email_template_id,
        sms_template_id,
        priority: NotificationPriority::High,
        tracking: Tracking::default(),
    };

    registry
        .notification_events
        .create(event, &actor)
        .await
        .expect("notification event")
        .id
        .expect("event id")
}
