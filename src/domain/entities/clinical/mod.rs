//! 진료 기록 엔티티
//!
//! 의사 소견, 의무 기록, 병력, 생활 루틴은 환자 범위(PHI)이고
//! 의료 제공자와 검사 기관은 설정 데이터입니다.

pub mod doctor_note;
pub mod medical_record;
pub mod medical_history;
pub mod provider;
pub mod lab;
pub mod routine;

pub use doctor_note::*;
pub use medical_record::*;
pub use medical_history::*;
pub use provider::*;
pub use lab::*;
pub use routine::*;
