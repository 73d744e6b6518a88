//! # Domain Layer Module
//!
//! 레코드 엔티티, API DTO, 도메인 모델을 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 레코드 (Allergy, Device, Notification ...)
//! ├── DTOs          - 페이지네이션, 목록/삭제 응답
//! └── Models        - 인증 정보, JWT 클레임, 감사 이벤트
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Document` | `entities` 모듈 + `Entity` trait | 영속 레코드 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Domain Models | `models` 모듈 | 인증/감사 값 객체 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
