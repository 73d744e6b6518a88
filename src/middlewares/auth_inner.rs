use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub tokens: Arc<TokenService>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let tokens = self.tokens.clone();
        let mode = self.mode;
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = extract_user(&req, &tokens);

            match (mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
                (AuthMode::Required, Ok(user)) => {
                    if let Some(required) = &required_role {
                        if !required.is_satisfied(&user.roles) {
                            log::warn!(
                                "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {}",
                                user.user_id,
                                user.roles,
                                required.describe()
                            );
                            let err = AppError::AuthorizationError(format!(
                                "접근 권한이 부족합니다 (필요 역할: {})",
                                required.describe()
                            ));
                            return Ok(reject(req, err));
                        }
                    }

                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(user)) => {
                    let allowed = required_role
                        .as_ref()
                        .is_none_or(|required| required.is_satisfied(&user.roles));
                    if allowed {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    }
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, err.error_response()).map_into_right_body()
}

fn extract_user(req: &ServiceRequest, tokens: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(auth_header)?;
    let claims = tokens.verify_token(token)?;

    Ok(AuthenticatedUser::new(claims.sub, claims.roles))
}
