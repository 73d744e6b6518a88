//! # 공통 CRUD 서비스
//!
//! 모든 레코드 엔티티가 같은 흐름을 따르므로 엔티티 타입별로 하나씩
//! `CrudService<E>`를 만들어 사용합니다.
//!
//! ```text
//! create: 검증 → 가드 → 추적 필드 기록 → 추가(같은 ID면 ALREADY_EXISTS) → 감사
//! get:    조회 (없으면 NOT_FOUND) → 감사
//! update: ID 확인 → 기존 레코드 조회 → 검증 → 가드 → created/creator 보존 → 저장 → 감사
//! delete: 기존 레코드 조회 → 삭제 가드 → 삭제 → 감사 → 삭제 메시지
//! list:   페이지 조건 그대로 전달 → 전체 건수/페이지 수 계산 → 레코드별 감사
//! ```

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{DeleteResponse, ListRequest, ListResponse};
use crate::domain::entities::Entity;
use crate::domain::models::audit::{AuditAction, AuditActor};
use crate::repositories::{EntityRepository, PageQuery};
use crate::services::audit::AuditService;
use crate::services::guards::EntityGuard;

/// 엔티티 하나에 대한 CRUD 서비스
pub struct CrudService<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    audit: Arc<AuditService>,
    guards: Vec<Arc<dyn EntityGuard<E>>>,
}

impl<E: Entity> CrudService<E> {
    pub fn new(repository: Arc<dyn EntityRepository<E>>, audit: Arc<AuditService>) -> Self {
        Self {
            repository,
            audit,
            guards: Vec::new(),
        }
    }

    /// 저장/삭제 가드를 추가합니다.
    pub fn with_guard(mut self, guard: impl EntityGuard<E> + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    pub fn repository(&self) -> &Arc<dyn EntityRepository<E>> {
        &self.repository
    }

    fn not_found(id: &str) -> AppError {
        AppError::NotFound(format!("{}: {} 항목을 찾을 수 없습니다", E::NAME, id))
    }

    async fn check_save(&self, entity: &E) -> AppResult<()> {
        for guard in &self.guards {
            guard.before_save(entity).await?;
        }
        Ok(())
    }

    /// 새 레코드를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 필드 검증 실패
    /// * `AppError::ConflictError` - 같은 ID의 레코드가 이미 존재
    /// * `AppError::NotFound` - 참조하는 레코드가 없음
    pub async fn create(&self, mut entity: E, actor: &AuditActor) -> AppResult<E> {
        entity.validate()?;
        self.check_save(&entity).await?;

        entity.tracking_mut().stamp_created(&actor.identity, Utc::now());
        let saved = self.repository.insert(entity).await?;

        info!("➕ {} 생성: {}", E::NAME, saved.id().unwrap_or_default());
        self.audit.record_entity(AuditAction::Created, actor, &saved).await;
        Ok(saved)
    }

    /// ID로 레코드를 조회합니다.
    pub async fn get(&self, id: &str, actor: &AuditActor) -> AppResult<E> {
        let entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        self.audit.record_entity(AuditAction::Accessed, actor, &entity).await;
        Ok(entity)
    }

    /// 기존 레코드를 교체합니다. `created`와 `creator`는 기존 값을 유지합니다.
    pub async fn update(&self, mut entity: E, actor: &AuditActor) -> AppResult<E> {
        let id = entity
            .id()
            .map(str::to_string)
            .ok_or_else(|| AppError::ValidationError(format!("{} ID는 필수입니다", E::NAME)))?;

        let existing = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Self::not_found(&id))?;

        entity.validate()?;
        self.check_save(&entity).await?;

        let previous = existing.tracking();
        let tracking = entity.tracking_mut();
        tracking.created = previous.created;
        tracking.creator = previous.creator.clone();
        tracking.stamp_modified(&actor.identity, Utc::now());

        let saved = self.repository.save(entity).await?;

        info!("✏️ {} 수정: {}", E::NAME, id);
        self.audit.record_entity(AuditAction::Updated, actor, &saved).await;
        Ok(saved)
    }

    /// 레코드를 삭제하고 엔티티별 형식의 메시지를 반환합니다.
    pub async fn delete(&self, id: &str, actor: &AuditActor) -> AppResult<DeleteResponse> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        for guard in &self.guards {
            guard.before_delete(id).await?;
        }

        if !self.repository.delete_by_id(id).await? {
            return Err(Self::not_found(id));
        }

        info!("🗑️ {} 삭제: {}", E::NAME, id);
        self.audit.record_entity(AuditAction::Deleted, actor, &existing).await;
        Ok(DeleteResponse::deleted(E::delete_message(id)))
    }

    /// 페이지 단위로 조회합니다.
    ///
    /// 페이지 번호, 크기, 정렬 조건은 그대로 저장소에 전달됩니다.
    /// `patientId` / `nationalHealthId` 필터는 환자 범위 엔티티에서만 허용됩니다.
    pub async fn list(&self, request: &ListRequest, actor: &AuditActor) -> AppResult<ListResponse<E>> {
        if request.pagination.page_size == 0 {
            return Err(AppError::ValidationError(
                "pageSize는 1 이상이어야 합니다".to_string(),
            ));
        }

        if request.has_patient_filter() && !E::PATIENT_SCOPED {
            return Err(AppError::ValidationError(format!(
                "{}는 환자 필터를 지원하지 않습니다",
                E::NAME
            )));
        }

        let mut query = PageQuery::from_pagination(&request.pagination);
        if let Some(patient_id) = &request.patient_id {
            query = query.filter("patientId", patient_id.clone());
        }
        if let Some(national_health_id) = &request.national_health_id {
            query = query.filter("nationalHealthId", national_health_id.clone());
        }

        let page = self.repository.find_page(&query).await?;
        debug!(
            "{} 목록 조회: page={} size={} total={}",
            E::NAME,
            query.page_number,
            query.page_size,
            page.total_records
        );

        for item in &page.items {
            self.audit.record_entity(AuditAction::Accessed, actor, item).await;
        }

        Ok(ListResponse {
            pagination: request.pagination.with_totals(page.total_records),
            items: page.items,
        })
    }
}
