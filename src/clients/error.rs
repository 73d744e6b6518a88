//! 클라이언트 호출 에러

use thiserror::Error;

use crate::core::status::{ErrorStatus, RpcCode};

/// 호출 위치 정보 (컴포넌트 이름과 호출별 숫자 코드)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub component: &'a str,
    pub error_code: i32,
}

impl<'a> CallSite<'a> {
    pub fn new(component: &'a str, error_code: i32) -> Self {
        Self {
            component,
            error_code,
        }
    }
}

/// 원격 호출 실패
///
/// `code`는 서버가 보낸 상태 코드, `error_code`는 실패한 호출 위치의 번호입니다.
#[derive(Debug, Error)]
#[error("{component}[{error_code}] {code}: {message}")]
pub struct ClientError {
    pub code: RpcCode,
    pub component: String,
    pub error_code: i32,
    pub message: String,
    pub details: Vec<String>,
    #[source]
    pub source: Option<reqwest::Error>,
}

impl ClientError {
    pub fn new(code: RpcCode, site: CallSite<'_>, message: impl Into<String>) -> Self {
        Self {
            code,
            component: site.component.to_string(),
            error_code: site.error_code,
            message: message.into(),
            details: Vec::new(),
            source: None,
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_source(mut self, source: reqwest::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// 서버 에러 응답을 변환합니다.
    ///
    /// 표준 에러 본문이면 코드, 메시지, 세부 정보를 그대로 옮기고,
    /// 아니면 HTTP 상태로 코드를 추정합니다. 본문 코드가 `OK`(0)이거나
    /// 알 수 없는 값이면 HTTP 상태를 따릅니다.
    pub fn from_response(http_status: u16, body: &str, site: CallSite<'_>) -> Self {
        match serde_json::from_str::<ErrorStatus>(body) {
            Ok(status) => {
                let code = if (1..=16).contains(&status.code) {
                    status.rpc_code()
                } else {
                    RpcCode::from_http_status(http_status)
                };
                let message = if status.message.is_empty() {
                    status.error
                } else {
                    status.message
                };
                Self::new(code, site, message).with_details(status.details)
            }
            Err(_) => {
                let message = if body.trim().is_empty() {
                    format!("HTTP {}", http_status)
                } else {
                    body.trim().to_string()
                };
                Self::new(RpcCode::from_http_status(http_status), site, message)
            }
        }
    }

    /// 전송 계층 실패를 변환합니다.
    pub fn from_transport(error: reqwest::Error, site: CallSite<'_>) -> Self {
        let code = if error.is_timeout() {
            RpcCode::DeadlineExceeded
        } else if error.is_connect() {
            RpcCode::Unavailable
        } else {
            RpcCode::Unknown
        };
        Self::new(code, site, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: CallSite<'static> = CallSite {
        component: "AllergyClient",
        error_code: 2,
    };

    #[test]
    fn test_from_standard_error_body() {
        let body = r#"{"error":"Validation error: invalid fields [allergen: length]","code":3,"status":"INVALID_ARGUMENT","message":"invalid fields","details":["allergen: length"]}"#;
        let error = ClientError::from_response(400, body, SITE);

        assert_eq!(error.code, RpcCode::InvalidArgument);
        assert_eq!(error.component, "AllergyClient");
        assert_eq!(error.error_code, 2);
        assert_eq!(error.message, "invalid fields");
        assert_eq!(error.details, vec!["allergen: length".to_string()]);
    }

    #[test]
    fn test_body_code_wins_over_http_status() {
        let body = r#"{"code":9,"message":"in use"}"#;
        let error = ClientError::from_response(400, body, SITE);
        assert_eq!(error.code, RpcCode::FailedPrecondition);
    }

    #[test]
    fn test_ok_or_foreign_body_code_uses_http_status() {
        let body = r#"{"code":0,"message":"boom","details":["trace-1"]}"#;
        let error = ClientError::from_response(500, body, SITE);
        assert_eq!(error.code, RpcCode::Internal);
        assert_eq!(error.message, "boom");
        assert_eq!(error.details, vec!["trace-1".to_string()]);

        let body = r#"{"code":404,"error":"Not Found"}"#;
        let error = ClientError::from_response(404, body, SITE);
        assert_eq!(error.code, RpcCode::NotFound);
        assert_eq!(error.message, "Not Found");
    }

    #[test]
    fn test_plain_body_uses_http_status() {
        let error = ClientError::from_response(429, "Too Many Requests", SITE);
        assert_eq!(error.code, RpcCode::ResourceExhausted);
        assert_eq!(error.message, "Too Many Requests");

        let error = ClientError::from_response(502, "", SITE);
        assert_eq!(error.code, RpcCode::Unavailable);
        assert_eq!(error.message, "HTTP 502");
    }

    #[test]
    fn test_display() {
        let error = ClientError::new(RpcCode::NotFound, SITE, "missing");
        assert_eq!(error.to_string(), "AllergyClient[2] NOT_FOUND: missing");
    }
}
