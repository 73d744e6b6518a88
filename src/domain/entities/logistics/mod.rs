//! 물류/기준 데이터 엔티티
//!
//! 국가, 제조사, 공급사, 검사 장치, 테스트 케이스를 관리합니다.
//! 엔티티 간 참조는 ID 문자열이며, 존재 여부는 서비스 계층의 가드가 확인합니다.

pub mod address;
pub mod country;
pub mod manufacturer;
pub mod vendor;
pub mod device;
pub mod test_case;

pub use address::*;
pub use country::*;
pub use manufacturer::*;
pub use vendor::*;
pub use device::*;
pub use test_case::*;
