use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tracking;

/// 국가
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "국가 이름은 필수입니다"))]
    pub name: String,
    /// ISO 3166-1 alpha-2 코드
    #[validate(length(equal = 2, message = "ISO 코드는 2자리여야 합니다"))]
    pub iso_code: String,
    #[serde(flatten)]
    pub tracking: Tracking,
}

impl_entity!(Country, collection = "countries", name = "Country", delete = IsDeleted, audit = Config);
