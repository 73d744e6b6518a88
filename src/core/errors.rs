//! # Application Error Handling System
//!
//! 레코드 서비스 전역 에러 처리 시스템입니다.
//! 모든 에러는 `AppError`로 모이고, `ResponseError` 구현을 통해
//! RPC 상태 코드가 담긴 표준 JSON 본문으로 변환됩니다.
//!
//! ## 응답 매핑
//!
//! | AppError | RPC 코드 | HTTP Status |
//! |----------|----------|-------------|
//! | `ValidationError` / `InvalidFields` | `INVALID_ARGUMENT` | 400 |
//! | `NotFound` | `NOT_FOUND` | 404 |
//! | `ConflictError` | `ALREADY_EXISTS` | 409 |
//! | `FailedPrecondition` | `FAILED_PRECONDITION` | 400 |
//! | `AuthenticationError` | `UNAUTHENTICATED` | 401 |
//! | `AuthorizationError` | `PERMISSION_DENIED` | 403 |
//! | `ExternalServiceError` | `UNAVAILABLE` | 503 |
//! | `DatabaseError` / `InternalError` | `INTERNAL` | 500 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get(&self, id: &str) -> AppResult<Allergy> {
//!     self.repository.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("Allergy: {} 항목을 찾을 수 없습니다", id)))
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

use crate::core::status::{ErrorStatus, RpcCode};

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 실패
/// - `ExternalServiceError`: 감사 서버 등 외부 호출 실패
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError` / `InvalidFields`: 입력값 검증 실패
/// - `ConflictError`: 이미 존재하는 ID로 생성 시도
/// - `NotFound`: 요청된 레코드가 존재하지 않음
/// - `FailedPrecondition`: 다른 레코드가 참조 중이라 삭제 불가
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 토큰 누락, 만료, 서명 오류
/// - `AuthorizationError`: 역할 부족
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// ```rust,ignore
    /// collection.insert_one(doc).await
    ///     .map_err(|e| AppError::DatabaseError(format!("Failed to insert: {}", e)))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 실패 목록
    ///
    /// `validator`의 `ValidationErrors`에서 변환되며, 각 항목은
    /// `"필드: 메시지"` 형식으로 응답 본문의 `details`에 그대로 실립니다.
    #[error("Validation error: invalid fields [{}]", .0.join(", "))]
    InvalidFields(Vec<String>),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 선행 조건 위반
    ///
    /// # 발생 시나리오
    /// - 장치가 참조 중인 제조사 삭제
    /// - 알림 이벤트가 참조 중인 이메일 템플릿 삭제
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 RPC 상태 코드
    pub fn rpc_code(&self) -> RpcCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => RpcCode::InvalidArgument,
            AppError::NotFound(_) => RpcCode::NotFound,
            AppError::ConflictError(_) => RpcCode::AlreadyExists,
            AppError::FailedPrecondition(_) => RpcCode::FailedPrecondition,
            AppError::AuthenticationError(_) => RpcCode::Unauthenticated,
            AppError::AuthorizationError(_) => RpcCode::PermissionDenied,
            AppError::ExternalServiceError(_) => RpcCode::Unavailable,
            AppError::DatabaseError(_) | AppError::InternalError(_) => RpcCode::Internal,
        }
    }

    /// 접두어 없는 에러 메시지
    pub fn message(&self) -> String {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::FailedPrecondition(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg.clone(),
            AppError::InvalidFields(_) => "invalid fields".to_string(),
        }
    }

    /// 응답 본문의 `details` 목록
    pub fn details(&self) -> Vec<String> {
        match self {
            AppError::InvalidFields(fields) => fields.clone(),
            _ => Vec::new(),
        }
    }

    /// 응답 본문으로 변환합니다.
    pub fn to_status(&self) -> ErrorStatus {
        let code = self.rpc_code();
        ErrorStatus {
            error: self.to_string(),
            code: code.as_i32(),
            status: code.name().to_string(),
            message: self.message(),
            details: self.details(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.rpc_code().http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// {
    ///   "error": "Not found: Device: 65f1... 항목을 찾을 수 없습니다",
    ///   "code": 5,
    ///   "status": "NOT_FOUND",
    ///   "message": "Device: 65f1... 항목을 찾을 수 없습니다",
    ///   "details": []
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 함께 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(status).json(self.to_status())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort();
        AppError::InvalidFields(fields)
    }
}

/// 중첩 구조체(`address` 등)의 에러까지 `"address.countryId: ..."` 형태로 펼칩니다.
fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let reason = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{}: {}", path, reason));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let id = ObjectId::parse_str(raw).context("Invalid ObjectId")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("pageSize must be positive".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.rpc_code(), RpcCode::InvalidArgument);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Allergy: 1 항목을 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_status().code, 5);
        assert_eq!(error.to_status().status, "NOT_FOUND");
    }

    #[test]
    fn test_conflict_and_precondition_codes() {
        assert_eq!(AppError::ConflictError("x".into()).rpc_code(), RpcCode::AlreadyExists);
        assert_eq!(
            AppError::ConflictError("x".into()).error_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::FailedPrecondition("x".into()).rpc_code(),
            RpcCode::FailedPrecondition
        );
        assert_eq!(
            AppError::FailedPrecondition("x".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_status().code, 16);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("audit endpoint down".to_string());
        assert_eq!(error.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Something went wrong");
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[test]
    fn test_validation_errors_become_field_details() {
        let sample = Sample { name: String::new(), count: 0 };
        let error: AppError = sample.validate().unwrap_err().into();

        assert_eq!(error.rpc_code(), RpcCode::InvalidArgument);
        assert_eq!(
            error.details(),
            vec!["count: range".to_string(), "name: must not be empty".to_string()]
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
