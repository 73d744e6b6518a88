//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 레코드 엔티티를 정의합니다.
//! 모든 엔티티는 [`Entity`] trait을 구현하며, 저장소와 서비스 계층은
//! 이 trait 하나만 보고 동작합니다.
//!
//! ## 구성
//!
//! ```text
//! entities/
//! ├── health/          ← Allergy, Medication, Vaccine
//! ├── clinical/        ← DoctorNote, MedicalRecord, MedicalHistory, Routine, Provider, Lab
//! ├── vitals/          ← BPM, HeartRPM, Height, Weight, Temperature
//! ├── connected/       ← ConnectedTest
//! ├── logistics/       ← Country, Manufacturer, Vendor, Device, TestCase
//! └── communications/  ← EmailTemplate, SMSTemplate, NotificationEvent, Notification
//! ```
//!
//! ## 공통 필드
//!
//! - `id`: 24자리 hex ObjectId 문자열 (MongoDB에는 `_id`로 저장)
//! - `created` / `modified` / `creator` / `modifier`: 서비스 계층이 기록하는 추적 필드
//! - `patientId` / `nationalHealthId`: 환자 범위 엔티티의 환자 참조
//!
//! JSON 필드는 camelCase, 열거형 값은 SCREAMING_SNAKE_CASE입니다.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

pub use crate::domain::models::audit::AuditCategory;

/// 엔티티 trait 구현 매크로
///
/// 모든 엔티티는 `id`, `tracking` 필드를 가져야 합니다.
/// `patient` 표시가 있으면 `patient_id`, `national_health_id` 필드도 필요합니다.
macro_rules! impl_entity {
    (@fields) => {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }

        fn tracking(&self) -> &$crate::domain::entities::Tracking {
            &self.tracking
        }

        fn tracking_mut(&mut self) -> &mut $crate::domain::entities::Tracking {
            &mut self.tracking
        }
    };
    ($ty:ty, collection = $collection:literal, name = $name:literal, delete = $style:ident, audit = $audit:ident) => {
        impl $crate::domain::entities::Entity for $ty {
            const COLLECTION: &'static str = $collection;
            const NAME: &'static str = $name;
            const DELETE_STYLE: $crate::domain::entities::DeleteMessageStyle =
                $crate::domain::entities::DeleteMessageStyle::$style;
            const AUDIT: $crate::domain::entities::AuditCategory =
                $crate::domain::entities::AuditCategory::$audit;

            impl_entity!(@fields);
        }
    };
    ($ty:ty, collection = $collection:literal, name = $name:literal, delete = $style:ident, audit = $audit:ident, patient) => {
        impl $crate::domain::entities::Entity for $ty {
            const COLLECTION: &'static str = $collection;
            const NAME: &'static str = $name;
            const DELETE_STYLE: $crate::domain::entities::DeleteMessageStyle =
                $crate::domain::entities::DeleteMessageStyle::$style;
            const AUDIT: $crate::domain::entities::AuditCategory =
                $crate::domain::entities::AuditCategory::$audit;
            const PATIENT_SCOPED: bool = true;

            impl_entity!(@fields);

            fn patient(&self) -> Option<$crate::domain::entities::PatientRef> {
                Some($crate::domain::entities::PatientRef {
                    patient_id: self.patient_id.clone(),
                    national_health_id: self.national_health_id.clone(),
                })
            }
        }
    };
}

pub mod health;
pub mod clinical;
pub mod vitals;
pub mod connected;
pub mod logistics;
pub mod communications;
pub mod timestamp;

pub use health::*;
pub use clinical::*;
pub use vitals::*;
pub use connected::*;
pub use logistics::*;
pub use communications::*;

/// 삭제 응답 메시지 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMessageStyle {
    /// `"Country: <id> is deleted."`
    IsDeleted,
    /// `"Allergy ID: <id> deleted."`
    IdDeleted,
}

/// 생성/수정 추적 필드
///
/// 엔티티에 `#[serde(flatten)]`으로 포함되어 `created`, `modified`,
/// `creator`, `modifier`가 최상위 JSON 필드로 나타납니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl Tracking {
    /// 신규 레코드의 추적 필드를 기록합니다.
    pub fn stamp_created(&mut self, actor: &str, now: DateTime<Utc>) {
        self.created = Some(now);
        self.creator = Some(actor.to_string());
        self.stamp_modified(actor, now);
    }

    /// 수정 추적 필드를 기록합니다.
    pub fn stamp_modified(&mut self, actor: &str, now: DateTime<Utc>) {
        self.modified = Some(now);
        self.modifier = Some(actor.to_string());
    }
}

/// 환자 참조
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRef {
    pub patient_id: String,
    pub national_health_id: Option<String>,
}

/// 저장 가능한 레코드 엔티티
pub trait Entity:
    Serialize + DeserializeOwned + Validate + Clone + Debug + Send + Sync + Unpin + 'static
{
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;
    /// 메시지와 클라이언트 컴포넌트 이름에 쓰이는 표시 이름
    const NAME: &'static str;
    const DELETE_STYLE: DeleteMessageStyle;
    const AUDIT: AuditCategory;
    /// `patientId` / `nationalHealthId` 필터 허용 여부
    const PATIENT_SCOPED: bool = false;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    fn tracking(&self) -> &Tracking;
    fn tracking_mut(&mut self) -> &mut Tracking;

    fn patient(&self) -> Option<PatientRef> {
        None
    }

    /// 삭제 응답 메시지
    fn delete_message(id: &str) -> String {
        match Self::DELETE_STYLE {
            DeleteMessageStyle::IsDeleted => format!("{}: {} is deleted.", Self::NAME, id),
            DeleteMessageStyle::IdDeleted => format!("{} ID: {} deleted.", Self::NAME, id),
        }
    }
}

/// 이메일 주소 목록 검증
pub(crate) fn validate_email_list(emails: &[String]) -> Result<(), ValidationError> {
    if emails.iter().all(|email| email.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("유효하지 않은 이메일 주소가 있습니다".into()))
    }
}

/// 시작/종료 시각 순서 검증
pub(crate) fn validate_period(
    start: Option<&DateTime<Utc>>,
    end: Option<&DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::new("period")
            .with_message("종료일은 시작일 이후여야 합니다".into())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_styles() {
        assert_eq!(Country::delete_message("abc"), "Country: abc is deleted.");
        assert_eq!(Allergy::delete_message("abc"), "Allergy ID: abc deleted.");
        assert_eq!(Bpm::delete_message("1"), "BPM ID: 1 deleted.");
        assert_eq!(EmailTemplate::delete_message("x"), "EmailTemplate: x is deleted.");
        assert_eq!(Notification::delete_message("n"), "Notification ID: n deleted.");
        assert_eq!(ConnectedTest::delete_message("t"), "ConnectedTest ID: t deleted.");
    }

    #[test]
    fn test_tracking_flattened_into_entity() {
        let mut country = Country {
            id: Some("65f1c0c2a7b4d3e2f1a0b9c8".to_string()),
            name: "Korea".to_string(),
            iso_code: "KR".to_string(),
            tracking: Tracking::default(),
        };
        country.tracking.stamp_created("user-1", Utc::now());

        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["isoCode"], "KR");
        assert_eq!(json["creator"], "user-1");
        assert_eq!(json["modifier"], "user-1");
        assert!(json.get("tracking").is_none());

        let back: Country = serde_json::from_value(json).unwrap();
        assert_eq!(back, country);
    }

    #[test]
    fn test_email_list_validation() {
        assert!(validate_email_list(&["a@example.com".to_string()]).is_ok());
        assert!(validate_email_list(&[]).is_ok());
        assert!(validate_email_list(&["not-an-email".to_string()]).is_err());
    }

    #[test]
    fn test_patient_scoping() {
        assert!(Allergy::PATIENT_SCOPED);
        assert!(HeartRpm::PATIENT_SCOPED);
        assert!(!Device::PATIENT_SCOPED);
        assert!(Notification::PATIENT_SCOPED);
    }
}
