use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 검사 장치
///
/// 제조사, 공급사, 제조국 ID로 다른 물류 레코드를 참조합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "장치 유형은 필수입니다"))]
    pub device_type: String,
    #[validate(length(min = 1, message = "모델명은 필수입니다"))]
    pub model: String,
    #[validate(length(min = 1, message = "제조사 ID는 필수입니다"))]
    pub manufacturer_id: String,
    #[validate(length(min = 1, message = "공급사 ID는 필수입니다"))]
    pub vendor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_country_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub manufacture_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<f64>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Device, collection = "devices", name = "Device", delete = IsDeleted, audit = Config);
