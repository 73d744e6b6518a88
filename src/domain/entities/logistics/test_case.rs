use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 검사 키트 묶음 (로트 단위)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "제조사 ID는 필수입니다"))]
    pub manufacturer_id: String,
    #[validate(length(min = 1, message = "공급사 ID는 필수입니다"))]
    pub vendor_id: String,
    #[validate(length(min = 1, message = "로트 번호는 필수입니다"))]
    pub lot_number: String,
    #[validate(range(min = 1, message = "검사 수량은 1 이상이어야 합니다"))]
    pub number_of_tests: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub manufacture_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(TestCase, collection = "test_cases", name = "TestCase", delete = IsDeleted, audit = Config);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_of_tests_positive() {
        let json = serde_json::json!({
            "manufacturerId": "m",
            "vendorId": "v",
            "lotNumber": "LOT-1",
            "numberOfTests": 0
        });
        let test_case: TestCase = serde_json::from_value(json).unwrap();
        assert!(test_case.validate().is_err());
    }
}
