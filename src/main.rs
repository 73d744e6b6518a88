//! OpenCDX 레코드 서비스 메인 애플리케이션
//!
//! 저장소(MongoDB 또는 메모리)를 선택해 서비스 레지스트리를 조립하고,
//! Actix-web HTTP 서버로 레코드 API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use opencdx_records::config::{
    AuditConfig, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
    StorageKind,
};
use opencdx_records::core::errors::AppError;
use opencdx_records::core::registry::ServiceRegistry;
use opencdx_records::db::Database;
use opencdx_records::repositories::{MemoryProvider, MongoProvider};
use opencdx_records::routes::configure_all_routes;
use opencdx_records::services::audit::AuditService;
use opencdx_records::services::auth::TokenService;
use opencdx_records::services::communications::LogMessageSender;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 OpenCDX 레코드 서비스 시작중...");

    let registry = build_registry().await.map_err(to_io_error)?;
    registry.initialize_all().await.map_err(to_io_error)?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry).await
}

/// 저장소를 고르고 서비스 레지스트리를 조립합니다.
async fn build_registry() -> Result<ServiceRegistry, AppError> {
    let environment = Environment::current();
    let storage = DatabaseConfig::storage();
    info!("실행 환경: {:?}, 저장소: {:?}", environment, storage);

    let audit = Arc::new(AuditService::from_config(&AuditConfig::from_env())?);
    let tokens = Arc::new(TokenService::from_env());
    let sender = Arc::new(LogMessageSender);

    let registry = match storage {
        StorageKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            ServiceRegistry::build(&MongoProvider::new(database), audit, tokens, sender)
        }
        StorageKind::Memory => {
            if environment.is_production() {
                warn!("⚠️ 운영 환경에서 메모리 저장소를 사용합니다. 재시작 시 데이터가 사라집니다");
            }
            ServiceRegistry::build(&MemoryProvider, audit, tokens, sender)
        }
    };

    Ok(registry)
}

/// HTTP 서버를 구성하고 실행합니다.
///
/// 미들웨어 순서: Rate Limiting → CORS → 요청 로그 → 경로 정규화
async fn start_http_server(registry: ServiceRegistry) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정 오류"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    let origins = CorsConfig::allowed_origins();
    info!("🔓 CORS 허용 Origin: {}", origins.join(", "));

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &registry))
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev (기본값)
/// * `PROFILE=prod` - .env.prod
/// * 기타 - .env
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화. 기본값: "info,actix_web=debug"
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

fn configure_cors(origins: &[String]) -> Cors {
    let cors = origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

fn to_io_error(e: AppError) -> io::Error {
    error!("❌ 서비스 초기화 실패: {}", e);
    io::Error::other(e.to_string())
}
