//! MongoDB 연결 관리
//!
//! `MONGODB_URI`, `DATABASE_NAME` 환경 변수로 연결하고 ping으로 연결을 확인합니다.

use log::info;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// MongoDB 클라이언트와 데이터베이스 이름
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 연결합니다.
    pub async fn new() -> Result<Self, AppError> {
        Self::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await
    }

    /// 주어진 URI와 데이터베이스로 연결하고 ping을 보냅니다.
    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("opencdx_records".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
