//! 알림 처리 DTO

use serde::{Deserialize, Serialize};

/// 대기 중 알림 처리 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
}

fn default_batch_size() -> u64 {
    100
}

impl Default for ProcessRequest {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

/// 처리 결과 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSummary {
    /// 처리한 알림 수
    pub processed: u64,
    /// 발송에 성공한 채널 수
    pub sent: u64,
    /// 발송에 실패한 채널 수
    pub failed: u64,
}
