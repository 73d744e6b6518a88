//! 리포지토리 팩토리
//!
//! 레지스트리는 엔티티 타입마다 한 번씩 `repository::<E>()`를 호출하고,
//! 받은 `Arc`를 서비스와 가드가 공유합니다.

use std::sync::Arc;

use crate::db::Database;
use crate::domain::entities::Entity;

use super::{EntityRepository, InMemoryRepository, MongoRepository};

/// 엔티티 타입별 리포지토리 생성기
pub trait RepositoryProvider {
    fn repository<E: Entity>(&self) -> Arc<dyn EntityRepository<E>>;

    /// 시작 로그에 표시되는 저장소 이름
    fn describe(&self) -> String;
}

/// MongoDB 컬렉션 기반 리포지토리 생성기
#[derive(Clone)]
pub struct MongoProvider {
    db: Arc<Database>,
}

impl MongoProvider {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl RepositoryProvider for MongoProvider {
    fn repository<E: Entity>(&self) -> Arc<dyn EntityRepository<E>> {
        Arc::new(MongoRepository::<E>::new(&self.db))
    }

    fn describe(&self) -> String {
        format!("MongoDB ({})", self.db.database_name())
    }
}

/// 메모리 리포지토리 생성기
#[derive(Clone, Default)]
pub struct MemoryProvider;

impl RepositoryProvider for MemoryProvider {
    fn repository<E: Entity>(&self) -> Arc<dyn EntityRepository<E>> {
        Arc::new(InMemoryRepository::<E>::new())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
