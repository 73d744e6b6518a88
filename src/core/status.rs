//! # RPC 상태 코드
//!
//! 서버와 클라이언트 래퍼가 공유하는 상태 코드 체계입니다.
//! gRPC 표준 코드 번호(0-16)를 그대로 사용하여, REST 응답 본문에 담긴
//! 에러를 클라이언트가 원래 코드 그대로 복원할 수 있게 합니다.
//!
//! ## 에러 응답 본문
//!
//! ```json
//! {
//!   "error": "Not found: Allergy: 65f1... 항목을 찾을 수 없습니다",
//!   "code": 5,
//!   "status": "NOT_FOUND",
//!   "message": "Allergy: 65f1... 항목을 찾을 수 없습니다",
//!   "details": []
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// gRPC 표준 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl RpcCode {
    /// 코드 번호를 반환합니다.
    pub fn as_i32(self) -> i32 {
        match self {
            RpcCode::Ok => 0,
            RpcCode::Cancelled => 1,
            RpcCode::Unknown => 2,
            RpcCode::InvalidArgument => 3,
            RpcCode::DeadlineExceeded => 4,
            RpcCode::NotFound => 5,
            RpcCode::AlreadyExists => 6,
            RpcCode::PermissionDenied => 7,
            RpcCode::ResourceExhausted => 8,
            RpcCode::FailedPrecondition => 9,
            RpcCode::Aborted => 10,
            RpcCode::OutOfRange => 11,
            RpcCode::Unimplemented => 12,
            RpcCode::Internal => 13,
            RpcCode::Unavailable => 14,
            RpcCode::DataLoss => 15,
            RpcCode::Unauthenticated => 16,
        }
    }

    /// 코드 번호에서 상태 코드를 복원합니다. 범위 밖의 번호는 `Unknown`입니다.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => RpcCode::Ok,
            1 => RpcCode::Cancelled,
            3 => RpcCode::InvalidArgument,
            4 => RpcCode::DeadlineExceeded,
            5 => RpcCode::NotFound,
            6 => RpcCode::AlreadyExists,
            7 => RpcCode::PermissionDenied,
            8 => RpcCode::ResourceExhausted,
            9 => RpcCode::FailedPrecondition,
            10 => RpcCode::Aborted,
            11 => RpcCode::OutOfRange,
            12 => RpcCode::Unimplemented,
            13 => RpcCode::Internal,
            14 => RpcCode::Unavailable,
            15 => RpcCode::DataLoss,
            16 => RpcCode::Unauthenticated,
            _ => RpcCode::Unknown,
        }
    }

    /// 응답 본문의 `status` 필드에 쓰이는 이름
    pub fn name(self) -> &'static str {
        match self {
            RpcCode::Ok => "OK",
            RpcCode::Cancelled => "CANCELLED",
            RpcCode::Unknown => "UNKNOWN",
            RpcCode::InvalidArgument => "INVALID_ARGUMENT",
            RpcCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            RpcCode::NotFound => "NOT_FOUND",
            RpcCode::AlreadyExists => "ALREADY_EXISTS",
            RpcCode::PermissionDenied => "PERMISSION_DENIED",
            RpcCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            RpcCode::FailedPrecondition => "FAILED_PRECONDITION",
            RpcCode::Aborted => "ABORTED",
            RpcCode::OutOfRange => "OUT_OF_RANGE",
            RpcCode::Unimplemented => "UNIMPLEMENTED",
            RpcCode::Internal => "INTERNAL",
            RpcCode::Unavailable => "UNAVAILABLE",
            RpcCode::DataLoss => "DATA_LOSS",
            RpcCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// 상태 코드에 대응하는 HTTP 상태
    ///
    /// Google API 가이드의 gRPC ↔ HTTP 매핑을 따릅니다.
    pub fn http_status(self) -> StatusCode {
        match self {
            RpcCode::Ok => StatusCode::OK,
            RpcCode::InvalidArgument | RpcCode::FailedPrecondition | RpcCode::OutOfRange => {
                StatusCode::BAD_REQUEST
            }
            RpcCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            RpcCode::PermissionDenied => StatusCode::FORBIDDEN,
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::AlreadyExists | RpcCode::Aborted => StatusCode::CONFLICT,
            RpcCode::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
            RpcCode::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            RpcCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RpcCode::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            RpcCode::Cancelled
            | RpcCode::Unknown
            | RpcCode::Internal
            | RpcCode::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 본문이 없는 HTTP 에러 응답(레이트 리미터, 프록시 등)에서 코드를 추정합니다.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => RpcCode::Ok,
            400 => RpcCode::InvalidArgument,
            401 => RpcCode::Unauthenticated,
            403 => RpcCode::PermissionDenied,
            404 => RpcCode::NotFound,
            409 => RpcCode::AlreadyExists,
            429 => RpcCode::ResourceExhausted,
            499 => RpcCode::Cancelled,
            501 => RpcCode::Unimplemented,
            502 | 503 => RpcCode::Unavailable,
            504 => RpcCode::DeadlineExceeded,
            500 => RpcCode::Internal,
            _ => RpcCode::Unknown,
        }
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 에러 응답 본문
///
/// 서버의 `AppError::error_response()`가 생성하고,
/// 클라이언트 래퍼가 `ClientError`로 복원할 때 읽어들입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatus {
    /// 사람이 읽는 전체 에러 문자열
    #[serde(default)]
    pub error: String,
    /// 숫자 상태 코드
    pub code: i32,
    /// 상태 코드 이름
    #[serde(default)]
    pub status: String,
    /// 에러 메시지
    #[serde(default)]
    pub message: String,
    /// 세부 정보 목록 (필드 검증 실패 목록 등)
    #[serde(default)]
    pub details: Vec<String>,
}

impl ErrorStatus {
    pub fn rpc_code(&self) -> RpcCode {
        RpcCode::from_i32(self.code)
    }
}
