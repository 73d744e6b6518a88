//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스 인스턴스는 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가
//! 시작 시 한 번 만들어 `Arc`로 공유합니다.
//!
//! # Features
//!
//! - 엔티티 공통 CRUD ([`crud::CrudService`])와 참조 무결성 가드
//! - PHI 접근/설정 변경 감사 이벤트 기록
//! - 알림 등록 및 템플릿 기반 발송
//! - JWT 토큰 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::crud::CrudService;
//!
//! let allergies = CrudService::<Allergy>::new(provider.repository(), audit.clone());
//! let saved = allergies.create(allergy, &user.to_actor()).await?;
//! ```

pub mod audit;
pub mod auth;
pub mod communications;
pub mod crud;
pub mod guards;
