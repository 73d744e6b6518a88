//! 검사 기관

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Address, Tracking};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "검사 기관 이름은 필수입니다"))]
    pub name: String,
    /// CLIA 인증 번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clia_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Lab, collection = "labs", name = "Lab", delete = IsDeleted, audit = Config);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Entity;

    #[test]
    fn test_lab_is_config_entity() {
        let json = serde_json::json!({ "name": "Central Lab", "cliaNumber": "05D0642827" });
        let lab: Lab = serde_json::from_value(json).unwrap();

        assert!(lab.validate().is_ok());
        assert!(!Lab::PATIENT_SCOPED);
        assert!(lab.patient().is_none());
    }
}
