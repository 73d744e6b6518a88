//! 타임스탬프 직렬화
//!
//! 모든 시각은 UTC, 소수점 아래 9자리 RFC 3339 문자열로 기록합니다
//! (`2024-01-01T00:00:00.100500000Z`). 자릿수가 고정이므로 문자열 순서가
//! 시간 순서와 같고, 메모리 저장소의 정렬이 그대로 시간순이 됩니다.
//! MongoDB에는 BSON Date로 바뀌어 저장됩니다 (`mongo_repository` 참고).
//!
//! ```rust,ignore
//! #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
//! pub measured_at: Option<DateTime<Utc>>,
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 고정 형식 문자열 길이
pub const CANONICAL_LEN: usize = 30;

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// 고정 형식으로 기록된 문자열만 시각으로 해석합니다.
pub fn parse_canonical(raw: &str) -> Option<DateTime<Utc>> {
    if raw.len() != CANONICAL_LEN || !raw.ends_with('Z') {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|value| value.with_timezone(&Utc))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(value))
}

/// RFC 3339 형식이면 자릿수와 관계없이 받습니다.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(deserializer)
}

pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<DateTime<Utc>>::deserialize(deserializer)
    }
}
