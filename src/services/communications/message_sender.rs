//! 이메일/SMS 발송 채널

use async_trait::async_trait;
use log::info;

use crate::core::errors::AppResult;

/// 렌더링된 메시지를 실제로 전달하는 채널
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_email(&self, to: &[String], subject: &str, body: &str) -> AppResult<()>;

    async fn send_sms(&self, to: &[String], body: &str) -> AppResult<()>;
}

/// 발송 내용을 로그로만 남기는 채널 (개발/테스트용)
#[derive(Debug, Clone, Default)]
pub struct LogMessageSender;

#[async_trait]
impl MessageSender for LogMessageSender {
    async fn send_email(&self, to: &[String], subject: &str, body: &str) -> AppResult<()> {
        info!("📧 이메일 발송 → {} | {} | {}", to.join(", "), subject, body);
        Ok(())
    }

    async fn send_sms(&self, to: &[String], body: &str) -> AppResult<()> {
        info!("📱 SMS 발송 → {} | {}", to.join(", "), body);
        Ok(())
    }
}
