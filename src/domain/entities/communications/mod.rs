//! 커뮤니케이션 엔티티
//!
//! 이메일/SMS 템플릿, 알림 이벤트, 개별 알림을 관리합니다.
//! 템플릿 본문의 `${name}` 자리표시자는 알림의 `variables`로 치환됩니다.

pub mod templates;
pub mod notification_event;
pub mod notification;

pub use templates::*;
pub use notification_event::*;
pub use notification::*;
