//! 의료 제공자

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Address, Tracking};

/// 의료 제공자 (의사, 간호사, 기관)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "제공자 이름은 필수입니다"))]
    pub name: String,
    /// 10자리 NPI 번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 10, message = "NPI 번호는 10자리입니다"))]
    pub npi_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Provider, collection = "providers", name = "Provider", delete = IsDeleted, audit = Config);
