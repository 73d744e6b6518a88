//! 병력 (본인 및 가족)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{validate_period, Tracking};

/// 병력의 주체
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryRelation {
    #[default]
    SelfReported,
    Parent,
    Sibling,
    Child,
    Grandparent,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_history_period"))]
pub struct MedicalHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    /// 진단명
    #[validate(length(min = 1, message = "진단명은 필수입니다"))]
    pub condition: String,
    #[serde(default)]
    pub relation: HistoryRelation,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub onset_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub resolved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(MedicalHistory, collection = "medical_histories", name = "MedicalHistory", delete = IdDeleted, audit = Phi, patient);

fn validate_history_period(history: &MedicalHistory) -> Result<(), ValidationError> {
    validate_period(history.onset_date.as_ref(), history.resolved_date.as_ref())
}
