//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 메서드 하나로 넘기는 핸들러 함수들입니다.
//! 핸들러에는 검증이나 분기 로직이 없고, 결과를 그대로 HTTP 200 JSON으로 돌려줍니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (EntityClient<E>, 외부 시스템)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP/JSON
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 제네릭 CRUD 엔드포인트     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   CrudService<E> / NotificationService          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   EntityRepository<E> (MongoDB | memory)        ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`entities`**: 모든 엔티티 공통 핸들러
//!   - `POST /{path}` 생성, `GET /{path}/{id}` 조회, `PUT /{path}` 수정
//!   - `DELETE /{path}/{id}` 삭제, `POST /{path}/list` 목록
//! - **`notifications`**: 알림 등록과 대기 알림 처리
//! - **`health`**: `GET /health`

pub mod entities;
pub mod health;
pub mod notifications;

use actix_web::HttpRequest;

use crate::domain::models::audit::AuditActor;
use crate::domain::models::auth::AuthenticatedUser;

/// 인증 사용자와 요청 주소로 감사 작업 수행자를 만듭니다.
pub(crate) fn request_actor(user: &AuthenticatedUser, req: &HttpRequest) -> AuditActor {
    let actor = user.to_actor();
    match req.connection_info().realip_remote_addr() {
        Some(addr) => actor.with_network_address(addr),
        None => actor,
    }
}
