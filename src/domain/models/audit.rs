//! 감사(audit) 이벤트 모델
//!
//! PHI 접근, 설정 변경, 커뮤니케이션 발송을 기록하는 감사 이벤트와
//! 호출 파라미터를 이벤트로 매핑하는 빌더를 정의합니다.
//!
//! ```rust,ignore
//! let event = AuditEventBuilder::new(AuditEventType::PhiAccessed)
//!     .actor(AuditActor::new("user-1").with_roles(vec!["clinician".into()]))
//!     .source("opencdx-records")
//!     .entity(AuditEntity::patient("patient-1", Some("NHID-1".into())))
//!     .resource("ALLERGY: 65f1c0c2a7b4d3e2f1a0b9c8")
//!     .data(serde_json::to_string(&allergy)?, SensitivityLevel::High)
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 감사 이벤트 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    PhiAccessed,
    PhiCreated,
    PhiUpdated,
    PhiDeleted,
    ConfigChange,
    Communication,
}

/// 엔티티에 수행된 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Accessed,
    Created,
    Updated,
    Deleted,
}

/// 엔티티별 감사 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditCategory {
    /// 환자 건강 정보 - 모든 접근 기록
    Phi,
    /// 설정/기준 데이터 - 변경만 기록
    Config,
    /// 알림 발송 - 변경만 기록
    Communication,
}

impl AuditCategory {
    /// 분류와 작업에서 이벤트 유형을 결정합니다. 기록하지 않는 조합은 `None`입니다.
    pub fn event_for(self, action: AuditAction) -> Option<AuditEventType> {
        match (self, action) {
            (AuditCategory::Phi, AuditAction::Accessed) => Some(AuditEventType::PhiAccessed),
            (AuditCategory::Phi, AuditAction::Created) => Some(AuditEventType::PhiCreated),
            (AuditCategory::Phi, AuditAction::Updated) => Some(AuditEventType::PhiUpdated),
            (AuditCategory::Phi, AuditAction::Deleted) => Some(AuditEventType::PhiDeleted),
            (_, AuditAction::Accessed) => None,
            (AuditCategory::Config, _) => Some(AuditEventType::ConfigChange),
            (AuditCategory::Communication, _) => Some(AuditEventType::Communication),
        }
    }

    /// 감사 레코드의 민감도
    pub fn sensitivity(self) -> SensitivityLevel {
        match self {
            AuditCategory::Phi => SensitivityLevel::High,
            AuditCategory::Communication => SensitivityLevel::Medium,
            AuditCategory::Config => SensitivityLevel::Low,
        }
    }
}

/// 데이터 민감도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

/// 작업 수행자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditActor {
    pub identity: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_address: Option<String>,
}

impl AuditActor {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            roles: Vec::new(),
            network_address: None,
        }
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_network_address(mut self, address: impl Into<String>) -> Self {
        self.network_address = Some(address.into());
        self
    }
}

/// 이벤트를 발생시킨 시스템
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSource {
    pub system_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

/// 작업 대상
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
}

impl AuditEntity {
    pub fn patient(patient_id: impl Into<String>, national_health_id: Option<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            national_health_id,
        }
    }
}

/// 감사 대상 레코드 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObject {
    /// `"<COLLECTION>: <id>"` 형식의 리소스 식별자
    pub resource: String,
    /// 레코드의 JSON 직렬화 문자열
    #[serde(default)]
    pub data: String,
    pub sensitivity: SensitivityLevel,
}

/// 감사 이벤트
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: String,
    #[serde(with = "crate::domain::entities::timestamp")]
    pub created: DateTime<Utc>,
    pub event_type: AuditEventType,
    pub actor: AuditActor,
    pub audit_source: AuditSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_entity: Option<AuditEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_object: Option<DataObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_use: Option<String>,
}

/// 감사 이벤트 빌더
///
/// `build()` 시점에 `created`와 `id`를 찍습니다.
#[derive(Debug, Clone)]
pub struct AuditEventBuilder {
    event_type: AuditEventType,
    actor: AuditActor,
    source: AuditSource,
    entity: Option<AuditEntity>,
    resource: Option<String>,
    data: Option<(String, SensitivityLevel)>,
    purpose_of_use: Option<String>,
}

impl AuditEventBuilder {
    pub fn new(event_type: AuditEventType) -> Self {
        Self {
            event_type,
            actor: AuditActor::new("anonymous"),
            source: AuditSource {
                system_info: "opencdx-records".to_string(),
                configuration: None,
            },
            entity: None,
            resource: None,
            data: None,
            purpose_of_use: None,
        }
    }

    pub fn actor(mut self, actor: AuditActor) -> Self {
        self.actor = actor;
        self
    }

    pub fn source(mut self, system_info: impl Into<String>) -> Self {
        self.source.system_info = system_info.into();
        self
    }

    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.source.configuration = Some(configuration.into());
        self
    }

    pub fn entity(mut self, entity: AuditEntity) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>, sensitivity: SensitivityLevel) -> Self {
        self.data = Some((data.into(), sensitivity));
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose_of_use = Some(purpose.into());
        self
    }

    pub fn build(self) -> AuditEvent {
        let data_object = match (self.resource, self.data) {
            (None, None) => None,
            (resource, data) => {
                let (data, sensitivity) = data.unwrap_or((String::new(), SensitivityLevel::Low));
                Some(DataObject {
                    resource: resource.unwrap_or_default(),
                    data,
                    sensitivity,
                })
            }
        };

        AuditEvent {
            id: Uuid::new_v4().to_string(),
            created: Utc::now(),
            event_type: self.event_type,
            actor: self.actor,
            audit_source: self.source,
            audit_entity: self.entity,
            data_object,
            purpose_of_use: self.purpose_of_use,
        }
    }
}
