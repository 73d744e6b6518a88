use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, ResponseError};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::models::audit::AuditActor;

/// JWT 토큰에서 추출된 요청자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 요청자 고유 ID (`sub`)
    pub user_id: String,

    /// 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    /// 감사 이벤트의 작업 수행자로 변환
    pub fn to_actor(&self) -> AuditActor {
        AuditActor::new(self.user_id.clone()).with_roles(self.roles.clone())
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 요청 확장에 넣어둔 사용자를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => {
                let error = AppError::AuthenticationError("인증되지 않은 요청입니다".to_string());
                ready(Err(actix_web::error::InternalError::from_response(
                    "unauthenticated",
                    error.error_response(),
                )
                .into()))
            }
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
