//! 의무 기록 내보내기/가져오기 요청

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MedicalRecordStatus {
    #[default]
    Requested,
    Exported,
    Imported,
    Failed,
}

/// 환자 의무 기록 묶음
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(length(min = 1, message = "기록 제목은 필수입니다"))]
    pub title: String,
    #[serde(default)]
    pub status: MedicalRecordStatus,
    /// 내보낸 문서 형식 (`FHIR`, `PDF` 등)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub request_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(MedicalRecord, collection = "medical_records", name = "MedicalRecord", delete = IdDeleted, audit = Phi, patient);
