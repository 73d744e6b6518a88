//! 알림 등록/처리 핸들러

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::ProcessRequest;
use crate::domain::entities::Notification;
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::request_actor;
use crate::services::communications::NotificationService;

/// `POST /notification`
pub async fn send_notification(
    service: web::Data<NotificationService>,
    user: AuthenticatedUser,
    req: HttpRequest,
    payload: web::Json<Notification>,
) -> Result<HttpResponse, AppError> {
    let notification = service
        .send_notification(payload.into_inner(), &request_actor(&user, &req))
        .await?;

    Ok(HttpResponse::Ok().json(notification))
}

/// `POST /notification/process` (admin)
///
/// 본문이 비어 있으면 기본 배치 크기(100)를 사용하고,
/// 본문이 있는데 JSON으로 읽을 수 없으면 `INVALID_ARGUMENT`입니다.
pub async fn process_pending(
    service: web::Data<NotificationService>,
    user: AuthenticatedUser,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request = parse_process_request(&body)?;
    let summary = service
        .process_pending(&request_actor(&user, &req), request.batch_size)
        .await?;

    Ok(HttpResponse::Ok().json(summary))
}

fn parse_process_request(body: &[u8]) -> Result<ProcessRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProcessRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("잘못된 처리 요청 본문: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_default_batch() {
        assert_eq!(parse_process_request(b"").unwrap().batch_size, 100);
        assert_eq!(parse_process_request(b"  \n").unwrap().batch_size, 100);
        assert_eq!(parse_process_request(br#"{"batchSize":5}"#).unwrap().batch_size, 5);
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(matches!(
            parse_process_request(br#"{"batchSize":"x"}"#),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            parse_process_request(b"{not json"),
            Err(AppError::ValidationError(_))
        ));
    }
}
