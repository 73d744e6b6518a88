//! 연결형 검사 결과 (PHI)

pub mod connected_test;

pub use connected_test::*;
