use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 알림 우선순위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPriority {
    Low,
    #[default]
    Medium,
    High,
    Immediate,
}

/// 알림 이벤트
///
/// 어떤 템플릿으로 이메일/SMS를 보낼지 정의합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "이벤트 이름은 필수입니다"))]
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_template_id: Option<String>,
    #[serde(default)]
    pub priority: NotificationPriority,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(NotificationEvent, collection = "notification_events", name = "NotificationEvent", delete = IsDeleted, audit = Config);
