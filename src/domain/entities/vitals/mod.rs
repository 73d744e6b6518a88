//! 활력 징후 측정 엔티티 (PHI)

pub mod bpm;
pub mod heart_rpm;
pub mod measurements;

pub use bpm::*;
pub use heart_rpm::*;
pub use measurements::*;
