//! 복용 약물 기록

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{validate_period, Tracking};

/// 환자 복용 약물
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_medication_period"))]
pub struct Medication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(length(min = 1, message = "약물 이름은 필수입니다"))]
    pub medication_name: String,
    #[validate(length(min = 1, message = "용량은 필수입니다"))]
    pub dosage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribing_doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pharmacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

fn validate_medication_period(medication: &Medication) -> Result<(), ValidationError> {
    validate_period(medication.start_date.as_ref(), medication.end_date.as_ref())
}

impl_entity!(Medication, collection = "medications", name = "Medication", delete = IdDeleted, audit = Phi, patient);
