//! 신장, 체중, 체온 측정

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightUnit {
    Centimeters,
    Inches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// 신장 측정값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HeightMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "신장은 0보다 커야 합니다"))]
    pub height: f64,
    pub unit: HeightUnit,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub measured_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

/// 체중 측정값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeightMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "체중은 0보다 커야 합니다"))]
    pub weight: f64,
    pub unit: WeightUnit,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub measured_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

/// 체온 측정값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    pub temperature: f64,
    pub unit: TemperatureUnit,
    /// 측정 부위 (ORAL, AXILLARY 등)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub measured_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(HeightMeasurement, collection = "height_measurements", name = "Height", delete = IdDeleted, audit = Phi, patient);
impl_entity!(WeightMeasurement, collection = "weight_measurements", name = "Weight", delete = IdDeleted, audit = Phi, patient);
impl_entity!(TemperatureMeasurement, collection = "temperature_measurements", name = "Temperature", delete = IdDeleted, audit = Phi, patient);
