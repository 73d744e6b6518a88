//! HTTP 미들웨어 모듈
//!
//! 엔티티 스코프마다 [`AuthMiddleware`]를 씌워 JWT를 검증하고,
//! 검증된 사용자를 요청 확장(extensions)에 넣습니다.
//!
//! ```rust,ignore
//! web::scope("/allergy")
//!     .wrap(AuthMiddleware::required(tokens.clone()))
//!     .route("", web::post().to(create_entity::<Allergy>));
//!
//! web::resource("/notification/process")
//!     .wrap(AuthMiddleware::required_with_role(tokens.clone(), "admin"));
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
