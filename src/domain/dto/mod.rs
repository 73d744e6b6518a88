//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 엔티티 외에 주고받는 요청/응답 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── common.rs         # 페이지네이션, 목록 요청/응답, 삭제 응답
//! └── notifications.rs  # 알림 일괄 처리 요청/결과
//! ```
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `Pageable` | `Pagination` |
//! | `Page<T>` | `ListResponse<T>` |
//! | `@RequestBody` | `web::Json<ListRequest>` |

pub mod common;
pub mod notifications;

pub use common::*;
pub use notifications::*;
