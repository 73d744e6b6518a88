//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! - [`auth`] - 요청 인증 정보, 인증 모드, 역할 요구사항
//! - [`token`] - JWT 클레임
//! - [`audit`] - 감사 이벤트와 빌더
//!
//! ### Entities vs Models
//! - **Entities** (`../entities/`): MongoDB에 저장되는 레코드, 고유 ID 보유
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체

pub mod auth;
pub mod token;
pub mod audit;

pub use auth::*;
pub use token::*;
pub use audit::*;
