//! 의사 소견

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 소견 작성 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoctorNoteStatus {
    #[default]
    Draft,
    Final,
    Amended,
}

/// 진료 중 작성된 의사 소견
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DoctorNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    /// 작성한 `Provider` 레코드 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[validate(length(min = 1, message = "소견 내용은 필수입니다"))]
    pub note: String,
    #[serde(default)]
    pub status: DoctorNoteStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub note_datetime: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(DoctorNote, collection = "doctor_notes", name = "DoctorNote", delete = IdDeleted, audit = Phi, patient);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_draft() {
        let json = serde_json::json!({ "patientId": "p-1", "note": "Follow up in two weeks" });
        let note: DoctorNote = serde_json::from_value(json).unwrap();

        assert_eq!(note.status, DoctorNoteStatus::Draft);
        assert!(note.tags.is_empty());
        assert!(note.validate().is_ok());

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["status"], "DRAFT");
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_empty_note_invalid() {
        let json = serde_json::json!({ "patientId": "p-1", "note": "" });
        let note: DoctorNote = serde_json::from_value(json).unwrap();
        assert!(note.validate().is_err());
    }
}
