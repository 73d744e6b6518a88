//! JWT 인증 미들웨어
//!
//! | 모드 | 토큰 없음/무효 | 역할 부족 |
//! |------|----------------|-----------|
//! | `Required` | 401 `UNAUTHENTICATED` | 403 `PERMISSION_DENIED` |
//! | `Optional` | 통과 (사용자 없음) | 통과 (사용자 없음) |

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인증 미들웨어 팩토리
#[derive(Clone)]
pub struct AuthMiddleware {
    tokens: Arc<TokenService>,
    mode: AuthMode,
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(tokens: Arc<TokenService>, mode: AuthMode) -> Self {
        Self {
            tokens,
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(tokens: Arc<TokenService>, mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            tokens,
            mode,
            required_role: Some(required_role),
        }
    }

    pub fn required(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Required)
    }

    pub fn optional(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Optional)
    }

    pub fn required_with_role(tokens: Arc<TokenService>, role: &str) -> Self {
        Self::new_with_role(tokens, AuthMode::Required, RequiredRole::new(role))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
            mode: self.mode,
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::auth::OptionalUser;

    const SECRET: &str = "middleware-test-secret";

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, 1))
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.0.map(|u| u.user_id).unwrap_or_else(|| "anonymous".to_string()))
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new().service(
                web::resource("/secure")
                    .wrap(AuthMiddleware::required(tokens()))
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/secure").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 16);
        assert_eq!(body["status"], "UNAUTHENTICATED");
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let tokens = tokens();
        let token = tokens.issue_token("user-7", vec![]).unwrap();
        let app = test::init_service(
            App::new().service(
                web::resource("/secure")
                    .wrap(AuthMiddleware::required(tokens.clone()))
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/secure")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "user-7");
    }

    #[actix_web::test]
    async fn test_role_requirement_forbidden() {
        let tokens = tokens();
        let token = tokens.issue_token("user-7", vec!["clinician".to_string()]).unwrap();
        let app = test::init_service(
            App::new().service(
                web::resource("/admin")
                    .wrap(AuthMiddleware::required_with_role(tokens.clone(), "admin"))
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 7);
    }

    #[actix_web::test]
    async fn test_optional_passes_without_token() {
        let app = test::init_service(
            App::new().service(
                web::resource("/maybe")
                    .wrap(AuthMiddleware::optional(tokens()))
                    .route(web::get().to(maybe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "anonymous");
    }
}
