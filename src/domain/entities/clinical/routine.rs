//! 환자 생활 루틴 (복약, 운동, 측정 일정)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{validate_period, Tracking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutineFrequency {
    Daily,
    Weekly,
    Monthly,
    AsNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_routine_period"))]
pub struct Routine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "환자 ID는 필수입니다"))]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
    #[validate(length(min = 1, message = "루틴 이름은 필수입니다"))]
    pub name: String,
    pub frequency: RoutineFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::domain::entities::timestamp::option")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub tracking: Tracking,
}

fn default_active() -> bool {
    true
}

fn validate_routine_period(routine: &Routine) -> Result<(), ValidationError> {
    validate_period(routine.start_date.as_ref(), routine.end_date.as_ref())
}

impl_entity!(Routine, collection = "routines", name = "Routine", delete = IdDeleted, audit = Phi, patient);
