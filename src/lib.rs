//! OpenCDX 레코드 서비스
//!
//! 환자 건강 기록(알레르기, 투약, 예방접종, 활력징후), 진단 키트 물류
//! (국가, 제조사, 공급사, 장비, 테스트 케이스), 알림(템플릿, 이벤트, 발송)을
//! REST API로 제공하는 서비스입니다. 에러 응답에는 RPC 상태 코드가 담기며,
//! 모든 레코드 접근은 감사 이벤트로 기록됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 엔티티별 REST 경로 + JWT 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 제네릭 CRUD 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CrudService + 가드, 감사, 알림
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← EntityRepository (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use opencdx_records::core::registry::ServiceRegistry;
//! use opencdx_records::repositories::MemoryProvider;
//!
//! let registry = ServiceRegistry::build(&MemoryProvider, audit, tokens, sender);
//! registry.initialize_all().await?;
//!
//! let allergy = registry.allergies.create(allergy, &actor).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod clients;

#[cfg(test)]
pub mod test_support;
