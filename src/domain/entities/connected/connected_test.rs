//! 검사 장치로 수행된 환자 검사 결과

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 검사 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Positive,
    Negative,
    Inconclusive,
    Invalid,
    Pending,
}

/// 연결형 검사
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedTest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    /// 사용한 `Device` 레코드 ID
    #[validate(length(min = 1, message = "장치 ID는 필수입니다"))]
    pub device_id: String,
    pub test_result: TestResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub resulted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(ConnectedTest, collection = "connected_tests", name = "ConnectedTest", delete = IdDeleted, audit = Phi, patient);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_names() {
        let json = serde_json::json!({
            "patientId": "p",
            "deviceId": "d",
            "testResult": "INCONCLUSIVE"
        });
        let test: ConnectedTest = serde_json::from_value(json).unwrap();
        assert_eq!(test.test_result, TestResult::Inconclusive);
        assert!(test.validate().is_ok());
    }
}
