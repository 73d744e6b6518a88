//! 감사(audit) 이벤트 기록 서비스
//!
//! CRUD 작업마다 [`AuditService::record_entity`]가 호출되고, 엔티티의 감사 분류에
//! 따라 이벤트를 만들어 [`AuditSink`]로 보냅니다. 싱크 전송 실패는 경고 로그만
//! 남기고 비즈니스 작업에는 영향을 주지 않습니다.
//!
//! | 싱크 | 조건 | 동작 |
//! |------|------|------|
//! | [`LogAuditSink`] | `AUDIT_URL` 미설정 | `audit` 타겟으로 JSON 로그 출력 |
//! | [`HttpAuditSink`] | `AUDIT_URL` 설정 | 감사 서버로 JSON POST |

pub mod audit_service;
pub mod audit_sink;

pub use audit_service::*;
pub use audit_sink::*;
