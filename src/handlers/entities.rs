//! 엔티티 공통 CRUD 핸들러
//!
//! 라우트 테이블이 엔티티 타입마다 `create_entity::<Allergy>` 처럼 인스턴스화합니다.
//! 서비스는 스코프의 `app_data`로 주입된 `web::Data<CrudService<E>>`입니다.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::ListRequest;
use crate::domain::entities::Entity;
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::request_actor;
use crate::services::crud::CrudService;

/// `POST /{path}`
pub async fn create_entity<E: Entity>(
    service: web::Data<CrudService<E>>,
    user: AuthenticatedUser,
    req: HttpRequest,
    payload: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let entity = service
        .create(payload.into_inner(), &request_actor(&user, &req))
        .await?;

    Ok(HttpResponse::Ok().json(entity))
}

/// `GET /{path}/{id}`
pub async fn get_entity<E: Entity>(
    service: web::Data<CrudService<E>>,
    user: AuthenticatedUser,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entity = service.get(&id, &request_actor(&user, &req)).await?;

    Ok(HttpResponse::Ok().json(entity))
}

/// `PUT /{path}`
pub async fn update_entity<E: Entity>(
    service: web::Data<CrudService<E>>,
    user: AuthenticatedUser,
    req: HttpRequest,
    payload: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let entity = service
        .update(payload.into_inner(), &request_actor(&user, &req))
        .await?;

    Ok(HttpResponse::Ok().json(entity))
}

/// `DELETE /{path}/{id}`
pub async fn delete_entity<E: Entity>(
    service: web::Data<CrudService<E>>,
    user: AuthenticatedUser,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete(&id, &request_actor(&user, &req)).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// `POST /{path}/list`
pub async fn list_entity<E: Entity>(
    service: web::Data<CrudService<E>>,
    user: AuthenticatedUser,
    req: HttpRequest,
    payload: web::Json<ListRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.list(&payload, &request_actor(&user, &req)).await?;

    Ok(HttpResponse::Ok().json(response))
}
