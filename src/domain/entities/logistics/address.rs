use serde::{Deserialize, Serialize};
use validator::Validate;

/// 우편 주소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[validate(length(min = 1, message = "도시는 필수입니다"))]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// `Country` 레코드 ID
    #[validate(length(min = 1, message = "국가 ID는 필수입니다"))]
    pub country_id: String,
}
