//! 애플리케이션 핵심 모듈
//!
//! - [`status`]: RPC 상태 코드와 표준 에러 본문
//! - [`errors`]: `AppError`와 HTTP 응답 변환
//! - [`registry`]: 시작 시 모든 서비스를 조립하는 `ServiceRegistry`

pub mod errors;
pub mod registry;
pub mod status;

pub use errors::*;
pub use registry::*;
pub use status::*;
