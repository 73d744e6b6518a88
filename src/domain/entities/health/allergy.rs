//! 알레르기 기록

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 알레르기 반응 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
    LifeThreatening,
}

/// 환자 알레르기
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Allergy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    /// 알레르기 유발 물질
    #[validate(length(min = 1, message = "알레르기 유발 물질은 필수입니다"))]
    pub allergen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
    pub severity: AllergySeverity,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub occurrence_date: Option<DateTime<Utc>>,
    /// 현재 유효한 알레르기인지 여부
    #[serde(default)]
    pub is_ongoing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Allergy, collection = "allergies", name = "Allergy", delete = IdDeleted, audit = Phi, patient);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allergy_wire_shape() {
        let json = serde_json::json!({
            "patientId": "p-1",
            "allergen": "Peanut",
            "severity": "LIFE_THREATENING",
            "isOngoing": true
        });
        let allergy: Allergy = serde_json::from_value(json).unwrap();

        assert_eq!(allergy.severity, AllergySeverity::LifeThreatening);
        assert!(allergy.id.is_none());
        assert!(allergy.validate().is_ok());
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let json = serde_json::json!({
            "patientId": "p-1",
            "allergen": "Peanut",
            "severity": "UNCOMFORTABLE"
        });
        assert!(serde_json::from_value::<Allergy>(json).is_err());
    }

    #[test]
    fn test_empty_allergen_invalid() {
        let json = serde_json::json!({ "patientId": "p-1", "allergen": "", "severity": "MILD" });
        let allergy: Allergy = serde_json::from_value(json).unwrap();
        assert!(allergy.validate().is_err());
    }
}
