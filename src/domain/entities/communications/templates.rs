//! 이메일 / SMS 템플릿

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 템플릿 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateType {
    #[default]
    Notification,
    Welcome,
    Reminder,
    Alert,
}

/// 이메일 템플릿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub template_type: TemplateType,
    #[validate(length(min = 1, message = "제목은 필수입니다"))]
    pub subject: String,
    #[validate(length(min = 1, message = "본문은 필수입니다"))]
    pub content: String,
    /// 본문에서 사용하는 변수 이름 목록
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

/// SMS 템플릿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SmsTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub template_type: TemplateType,
    #[validate(length(min = 1, max = 1600, message = "메시지는 1-1600자 사이여야 합니다"))]
    pub message: String,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(EmailTemplate, collection = "email_templates", name = "EmailTemplate", delete = IsDeleted, audit = Config);
impl_entity!(SmsTemplate, collection = "sms_templates", name = "SMSTemplate", delete = IsDeleted, audit = Config);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_message_length_limit() {
        let mut template = SmsTemplate {
            id: None,
            template_type: TemplateType::Reminder,
            message: "a".repeat(1601),
            variables: vec![],
            tracking: Tracking::default(),
        };
        assert!(template.validate().is_err());

        template.message = "Hi ${name}".to_string();
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_email_template_type_defaults() {
        let json = serde_json::json!({ "subject": "s", "content": "c" });
        let template: EmailTemplate = serde_json::from_value(json).unwrap();
        assert_eq!(template.template_type, TemplateType::Notification);
        assert!(template.variables.is_empty());
    }
}
