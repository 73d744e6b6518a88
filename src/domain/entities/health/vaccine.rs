//! 예방접종 기록

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 환자 예방접종
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(length(min = 1, message = "백신 이름은 필수입니다"))]
    pub vaccine_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,
    /// 접종 차수 (1부터)
    #[validate(range(min = 1, message = "접종 차수는 1 이상이어야 합니다"))]
    pub dose_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub administration_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Vaccine, collection = "vaccines", name = "Vaccine", delete = IdDeleted, audit = Phi, patient);
