use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    validate_email_list, AuditCategory, DeleteMessageStyle, Entity, PatientRef, Tracking,
};

/// 채널별 발송 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    #[default]
    Pending,
    Sent,
    Failed,
    NotApplicable,
}

impl NotificationStatus {
    /// 저장소 필터에 쓰이는 직렬화 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Pending => "PENDING",
            NotificationStatus::Sent => "SENT",
            NotificationStatus::Failed => "FAILED",
            NotificationStatus::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// 개별 알림
///
/// `eventId`가 가리키는 알림 이벤트의 템플릿으로 렌더링되어 발송됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "이벤트 ID는 필수입니다"))]
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_email_list"))]
    pub to_email: Vec<String>,
    #[serde(default)]
    pub to_phone: Vec<String>,
    /// 템플릿 치환 변수
    #[serde(default)]
    pub variables: HashMap<String, String>,
    #[serde(default)]
    pub email_status: NotificationStatus,
    #[serde(default)]
    pub sms_status: NotificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl Notification {
    /// 아직 발송되지 않은 채널이 있는지 확인합니다.
    pub fn is_pending(&self) -> bool {
        self.email_status == NotificationStatus::Pending
            || self.sms_status == NotificationStatus::Pending
    }
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";
    const NAME: &'static str = "Notification";
    const DELETE_STYLE: DeleteMessageStyle = DeleteMessageStyle::IdDeleted;
    const AUDIT: AuditCategory = AuditCategory::Communication;
    const PATIENT_SCOPED: bool = true;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn tracking(&self) -> &Tracking {
        &self.tracking
    }

    fn tracking_mut(&mut self) -> &mut Tracking {
        &mut self.tracking
    }

    // 시스템 알림은 환자 참조가 없습니다.
    fn patient(&self) -> Option<PatientRef> {
        self.patient_id.as_ref().map(|patient_id| PatientRef {
            patient_id: patient_id.clone(),
            national_health_id: self.national_health_id.clone(),
        })
    }
}
