//! 엔티티 저장/삭제 전 참조 무결성 검사
//!
//! 레지스트리가 엔티티별로 가드를 붙입니다.
//!
//! ```rust,ignore
//! let devices = CrudService::new(device_repo.clone(), audit.clone())
//!     .with_guard(ReferenceGuard::new(manufacturer_repo.clone(), "manufacturerId", |d: &Device| {
//!         Some(d.manufacturer_id.clone())
//!     }));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;
use crate::repositories::EntityRepository;

/// 저장/삭제 직전에 실행되는 검사
#[async_trait]
pub trait EntityGuard<E: Entity>: Send + Sync {
    async fn before_save(&self, _entity: &E) -> AppResult<()> {
        Ok(())
    }

    async fn before_delete(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

/// 참조하는 `R` 레코드가 존재해야 저장을 허용합니다.
pub struct ReferenceGuard<E, R: Entity> {
    references: Arc<dyn EntityRepository<R>>,
    field: &'static str,
    extract: fn(&E) -> Option<String>,
}

impl<E: Entity, R: Entity> ReferenceGuard<E, R> {
    pub fn new(
        references: Arc<dyn EntityRepository<R>>,
        field: &'static str,
        extract: fn(&E) -> Option<String>,
    ) -> Self {
        Self {
            references,
            field,
            extract,
        }
    }
}

#[async_trait]
impl<E: Entity, R: Entity> EntityGuard<E> for ReferenceGuard<E, R> {
    async fn before_save(&self, entity: &E) -> AppResult<()> {
        let Some(id) = (self.extract)(entity).filter(|id| !id.is_empty()) else {
            return Ok(());
        };

        if self.references.exists_by_id(&id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "{}: {} 항목을 찾을 수 없습니다 ({})",
                R::NAME,
                id,
                self.field
            )))
        }
    }
}

/// `D` 레코드가 참조 중이면 삭제를 거부합니다.
pub struct InUseGuard<E, D: Entity> {
    dependents: Arc<dyn EntityRepository<D>>,
    field: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, D: Entity> InUseGuard<E, D> {
    pub fn new(dependents: Arc<dyn EntityRepository<D>>, field: &'static str) -> Self {
        Self {
            dependents,
            field,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity, D: Entity> EntityGuard<E> for InUseGuard<E, D> {
    async fn before_delete(&self, id: &str) -> AppResult<()> {
        let count = self.dependents.count_by_field(self.field, id).await?;
        if count > 0 {
            return Err(AppError::FailedPrecondition(format!(
                "{}: {} is in use by {}",
                E::NAME,
                id,
                D::NAME
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Country, Manufacturer};
    use crate::repositories::InMemoryRepository;
    use crate::test_support::{sample_country, sample_manufacturer};

    #[tokio::test]
    async fn test_reference_guard_requires_existing_country() {
        let countries: Arc<dyn EntityRepository<Country>> = Arc::new(InMemoryRepository::new());
        let guard = ReferenceGuard::<Manufacturer, Country>::new(
            countries.clone(),
            "address.countryId",
            |m| m.address.as_ref().map(|a| a.country_id.clone()),
        );

        let missing = sample_manufacturer("Acme", "65f1c0c2a7b4d3e2f1a0b9c8");
        match guard.before_save(&missing).await {
            Err(AppError::NotFound(message)) => assert!(message.starts_with("Country: ")),
            other => panic!("expected NotFound, got {:?}", other),
        }

        let country = countries.save(sample_country("Korea", "KR")).await.unwrap();
        let present = sample_manufacturer("Acme", country.id.as_deref().unwrap());
        assert!(guard.before_save(&present).await.is_ok());
    }

    #[tokio::test]
    async fn test_in_use_guard_blocks_delete() {
        let manufacturers: Arc<dyn EntityRepository<Manufacturer>> =
            Arc::new(InMemoryRepository::new());
        let guard = InUseGuard::<Country, Manufacturer>::new(manufacturers.clone(), "address.countryId");
        let country_id = "65f1c0c2a7b4d3e2f1a0b9c8";

        assert!(guard.before_delete(country_id).await.is_ok());

        manufacturers
            .save(sample_manufacturer("Acme", country_id))
            .await
            .unwrap();

        match guard.before_delete(country_id).await {
            Err(AppError::FailedPrecondition(message)) => assert_eq!(
                message,
                "Country: 65f1c0c2a7b4d3e2f1a0b9c8 is in use by Manufacturer"
            ),
            other => panic!("expected FailedPrecondition, got {:?}", other),
        }
    }
}
