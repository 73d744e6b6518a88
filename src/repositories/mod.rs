//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티마다 리포지토리를 따로 만들지 않고, [`EntityRepository`] trait 하나를
//! MongoDB 구현과 메모리 구현이 제공합니다. 어떤 구현을 쓸지는
//! [`RepositoryProvider`]가 결정합니다 (`STORAGE=mongo|memory`).
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{MongoProvider, RepositoryProvider, PageQuery};
//!
//! let provider = MongoProvider::new(database);
//! let allergies = provider.repository::<Allergy>();
//! let page = allergies.find_page(&PageQuery::new(0, 10).filter("patientId", "p-1")).await?;
//! ```

pub mod memory_repository;
pub mod mongo_repository;
pub mod provider;

pub use memory_repository::InMemoryRepository;
pub use mongo_repository::MongoRepository;
pub use provider::*;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::Pagination;
use crate::domain::entities::Entity;

/// 필드 일치 조건 (`address.countryId` 같은 점 표기 경로 허용)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

/// 페이지 조회 조건
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub page_number: u64,
    pub page_size: u64,
    pub sort: Option<String>,
    pub ascending: bool,
    pub filters: Vec<FieldFilter>,
}

impl PageQuery {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size,
            sort: None,
            ascending: true,
            filters: Vec::new(),
        }
    }

    /// 요청의 페이지 번호, 크기, 정렬을 그대로 옮깁니다.
    pub fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            page_number: pagination.page_number,
            page_size: pagination.page_size,
            sort: pagination.sort.clone(),
            ascending: pagination.sort_ascending,
            filters: Vec::new(),
        }
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn skip(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// 조회된 한 페이지와 조건에 맞는 전체 건수
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_records: u64,
}

/// 엔티티 저장소
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// 인덱스 생성 등 시작 시 준비 작업
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    /// 새 레코드를 추가합니다. ID가 없으면 새 ObjectId를 부여하고,
    /// 같은 ID가 이미 있으면 `ConflictError`를 반환합니다.
    async fn insert(&self, entity: E) -> AppResult<E>;

    /// 저장(upsert)합니다. ID가 없으면 새 ObjectId를 부여합니다.
    async fn save(&self, entity: E) -> AppResult<E>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// 삭제된 레코드가 있었는지 반환합니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    async fn find_page(&self, query: &PageQuery) -> AppResult<Page<E>>;

    /// `field == value`인 레코드 수
    async fn count_by_field(&self, field: &str, value: &str) -> AppResult<u64>;
}

/// 같은 ID의 레코드가 이미 있을 때의 에러
pub fn already_exists<E: Entity>(id: &str) -> AppError {
    AppError::ConflictError(format!("{}: {} 이미 존재합니다", E::NAME, id))
}

/// 24자리 hex ObjectId 문자열을 파싱합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}
