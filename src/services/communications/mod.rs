//! 알림 발송 서비스 모듈
//!
//! ```text
//! POST /notification          → send_notification: 채널별 PENDING / NOT_APPLICABLE 결정 후 저장
//! POST /notification/process  → process_pending: 템플릿 렌더링 → MessageSender 발송 → SENT / FAILED 기록
//! ```

pub mod message_sender;
pub mod notification_service;
pub mod template;

pub use message_sender::*;
pub use notification_service::*;
pub use template::*;
