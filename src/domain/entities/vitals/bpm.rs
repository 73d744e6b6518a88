//! 혈압 측정

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Tracking;

/// 혈압 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BloodPressureUnit {
    #[default]
    MmHg,
    KPa,
}

/// 혈압 측정값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_pressure_order"))]
pub struct Bpm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(range(min = 1, max = 300))]
    pub systolic: i32,
    #[validate(range(min = 1, max = 300))]
    pub diastolic: i32,
    #[serde(default)]
    pub unit: BloodPressureUnit,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub measured_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

fn validate_pressure_order(bpm: &Bpm) -> Result<(), ValidationError> {
    if bpm.systolic < bpm.diastolic {
        return Err(ValidationError::new("systolic_below_diastolic")
            .with_message("수축기 혈압은 이완기 혈압보다 낮을 수 없습니다".into()));
    }
    Ok(())
}

impl_entity!(Bpm, collection = "bpm", name = "BPM", delete = IdDeleted, audit = Phi, patient);

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(systolic: i32, diastolic: i32) -> Bpm {
        Bpm {
            id: None,
            patient_id: "p-1".to_string(),
            national_health_id: None,
            systolic,
            diastolic,
            unit: BloodPressureUnit::MmHg,
            measured_at: None,
            device_id: None,
            tracking: Tracking::default(),
        }
    }

    #[test]
    fn test_pressure_ranges() {
        assert!(reading(120, 80).validate().is_ok());
        assert!(reading(80, 120).validate().is_err());
        assert!(reading(301, 80).validate().is_err());
        assert!(reading(120, 0).validate().is_err());
    }

    #[test]
    fn test_unit_defaults_to_mmhg() {
        let json = serde_json::json!({ "patientId": "p", "systolic": 110, "diastolic": 70 });
        let bpm: Bpm = serde_json::from_value(json).unwrap();
        assert_eq!(bpm.unit, BloodPressureUnit::MmHg);
    }
}
