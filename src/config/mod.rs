//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 로드한 뒤 각 설정 구조체가 값을 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 레이트 리미팅, CORS 설정
//! - [`auth_config`] - JWT 설정
//! - [`client_config`] - 클라이언트 채널, 감사 연동 설정
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` | 바인딩 주소 |
//! | `SERVER_WORKERS` | `4` | 워커 수 |
//! | `STORAGE` | `mongo` | `mongo` 또는 `memory` |
//! | `MONGODB_URI` / `DATABASE_NAME` | `mongodb://localhost:27017` / `opencdx` | MongoDB |
//! | `JWT_SECRET` / `JWT_EXPIRATION_HOURS` | 개발용 키 / `24` | 토큰 |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` | 레이트 리미팅 |
//! | `CORS_ALLOWED_ORIGINS` | localhost 주소들 | CORS |
//! | `AUDIT_URL` / `AUDIT_SYSTEM_NAME` | 없음 / `opencdx-records` | 감사 이벤트 |
//! | `OPENCDX_CLIENT_*` | | 클라이언트 채널 |
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env_or("PROPERTY", default)` |
//! | `@Profile("dev")` | `PROFILE=dev` → `.env.dev` |
//! | `@ConfigurationProperties` | `ClientConfig`, `AuditConfig` |

pub mod data_config;
pub mod auth_config;
pub mod client_config;

pub use data_config::*;
pub use auth_config::*;
pub use client_config::*;
