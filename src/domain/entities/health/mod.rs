//! 환자 건강 기록 엔티티 (PHI)

pub mod allergy;
pub mod medication;
pub mod vaccine;

pub use allergy::*;
pub use medication::*;
pub use vaccine::*;
