//! # 라우트 테이블
//!
//! 엔티티 경로마다 같은 제네릭 핸들러 다섯 개를 붙입니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/{path}` | `create_entity::<E>` |
//! | PUT | `/{path}` | `update_entity::<E>` |
//! | POST | `/{path}/list` | `list_entity::<E>` |
//! | GET | `/{path}/{id}` | `get_entity::<E>` |
//! | DELETE | `/{path}/{id}` | `delete_entity::<E>` |
//!
//! `/health`를 제외한 모든 스코프는 [`AuthMiddleware`]로 감싸집니다.

use std::sync::Arc;

use actix_web::{error::InternalError, web, ResponseError};

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::entities::*;
use crate::handlers::{entities, health, notifications};
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;
use crate::services::crud::CrudService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(registry.clone()))
        .route("/health", web::get().to(health::health_check));

    let tokens = &registry.tokens;

    // health
    configure_entity(cfg, "/allergy", registry.allergies.clone(), tokens);
    configure_entity(cfg, "/medication", registry.medications.clone(), tokens);
    configure_entity(cfg, "/vaccine", registry.vaccines.clone(), tokens);

    // clinical
    configure_entity(cfg, "/doctor-notes", registry.doctor_notes.clone(), tokens);
    configure_entity(cfg, "/records", registry.medical_records.clone(), tokens);
    configure_entity(cfg, "/MedicalHistory", registry.medical_histories.clone(), tokens);
    configure_entity(cfg, "/routine", registry.routines.clone(), tokens);
    configure_entity(cfg, "/provider", registry.providers.clone(), tokens);
    configure_entity(cfg, "/lab", registry.labs.clone(), tokens);

    // vitals
    configure_entity(cfg, "/vitals/bpm", registry.bpm.clone(), tokens);
    configure_entity(cfg, "/vitals/heartrpm", registry.heart_rpm.clone(), tokens);
    configure_entity(cfg, "/vitals/height", registry.heights.clone(), tokens);
    configure_entity(cfg, "/vitals/weight", registry.weights.clone(), tokens);
    configure_entity(cfg, "/vitals/temperature", registry.temperatures.clone(), tokens);

    // connected
    configure_entity(cfg, "/connected-test", registry.connected_tests.clone(), tokens);

    // logistics
    configure_entity(cfg, "/country", registry.countries.clone(), tokens);
    configure_entity(cfg, "/manufacturer", registry.manufacturers.clone(), tokens);
    configure_entity(cfg, "/vendor", registry.vendors.clone(), tokens);
    configure_entity(cfg, "/device", registry.devices.clone(), tokens);
    configure_entity(cfg, "/testcase", registry.test_cases.clone(), tokens);

    // communications
    configure_entity(cfg, "/email", registry.email_templates.clone(), tokens);
    configure_entity(cfg, "/sms", registry.sms_templates.clone(), tokens);
    configure_entity(cfg, "/event", registry.notification_events.clone(), tokens);
    configure_notification_routes(cfg, registry);
}

/// 엔티티 하나의 CRUD 스코프를 등록합니다.
pub fn configure_entity<E: Entity>(
    cfg: &mut web::ServiceConfig,
    path: &str,
    service: Arc<CrudService<E>>,
    tokens: &Arc<TokenService>,
) {
    cfg.service(
        web::scope(path)
            .app_data(web::Data::from(service))
            .wrap(AuthMiddleware::required(tokens.clone()))
            .route("", web::post().to(entities::create_entity::<E>))
            .route("", web::put().to(entities::update_entity::<E>))
            .route("/list", web::post().to(entities::list_entity::<E>))
            .route("/{id}", web::get().to(entities::get_entity::<E>))
            .route("/{id}", web::delete().to(entities::delete_entity::<E>)),
    );
}

fn configure_notification_routes(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry) {
    let tokens = &registry.tokens;

    cfg.service(
        web::scope("/notification")
            .app_data(web::Data::from(registry.notifications.clone()))
            .app_data(web::Data::from(registry.notification_service.clone()))
            .wrap(AuthMiddleware::required(tokens.clone()))
            .route("", web::post().to(notifications::send_notification))
            .service(
                web::resource("/process")
                    .wrap(AuthMiddleware::required_with_role(tokens.clone(), "admin"))
                    .route(web::post().to(notifications::process_pending)),
            )
            .route("/list", web::post().to(entities::list_entity::<Notification>))
            .route("/{id}", web::get().to(entities::get_entity::<Notification>))
            .route("/{id}", web::delete().to(entities::delete_entity::<Notification>)),
    );
}

/// JSON 본문 파싱 실패를 `INVALID_ARGUMENT` 에러 본문으로 바꿉니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("요청 본문을 해석할 수 없습니다: {}", err);
        let response = AppError::ValidationError(message).error_response();
        InternalError::from_response(err, response).into()
    })
}
