//! 엔티티 작업을 감사 이벤트로 변환해 기록합니다.

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

use crate::config::AuditConfig;
use crate::core::errors::AppResult;
use crate::domain::entities::Entity;
use crate::domain::models::audit::{
    AuditAction, AuditActor, AuditCategory, AuditEntity, AuditEvent, AuditEventBuilder,
};

use super::{AuditSink, HttpAuditSink, LogAuditSink};

/// 감사 이벤트 기록 서비스
pub struct AuditService {
    sink: Arc<dyn AuditSink>,
    system_name: String,
}

impl AuditService {
    pub fn new(sink: Arc<dyn AuditSink>, system_name: impl Into<String>) -> Self {
        Self {
            sink,
            system_name: system_name.into(),
        }
    }

    /// `AUDIT_URL`이 있으면 HTTP 싱크, 없으면 로그 싱크를 사용합니다.
    pub fn from_config(config: &AuditConfig) -> AppResult<Self> {
        let sink: Arc<dyn AuditSink> = match &config.url {
            Some(url) => {
                info!("📝 감사 이벤트 전송 대상: {}", url);
                Arc::new(HttpAuditSink::new(url.clone())?)
            }
            None => {
                info!("📝 감사 이벤트는 로그로 기록됩니다 (target: audit)");
                Arc::new(LogAuditSink)
            }
        };

        Ok(Self::new(sink, config.system_name.clone()))
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// 이벤트를 싱크로 보냅니다. 실패는 경고 로그로만 남습니다.
    pub async fn record(&self, event: AuditEvent) {
        if let Err(e) = self.sink.send(&event).await {
            warn!("⚠️ 감사 이벤트 기록 실패 ({:?}, {}): {}", event.event_type, event.id, e);
        }
    }

    /// 엔티티 작업 하나를 감사 이벤트로 기록합니다.
    ///
    /// 설정/커뮤니케이션 엔티티의 조회는 기록하지 않습니다.
    pub async fn record_entity<E: Entity>(&self, action: AuditAction, actor: &AuditActor, entity: &E) {
        let Some(event_type) = E::AUDIT.event_for(action) else {
            return;
        };

        let resource = resource_name::<E>(entity.id().unwrap_or_default());
        let data = audit_data(entity, &resource);
        let mut builder = AuditEventBuilder::new(event_type)
            .actor(actor.clone())
            .source(self.system_name.clone())
            .resource(resource)
            .data(data, E::AUDIT.sensitivity());

        if let Some(patient) = entity.patient() {
            builder = builder.entity(AuditEntity::patient(
                patient.patient_id,
                patient.national_health_id,
            ));
        }
        if E::AUDIT == AuditCategory::Config {
            builder = builder.configuration(E::COLLECTION);
        }

        self.record(builder.build()).await;
    }
}

/// `"ALLERGY: <id>"` 형식의 리소스 이름
pub fn resource_name<E: Entity>(id: &str) -> String {
    format!("{}: {}", E::NAME.to_uppercase(), id)
}

/// 감사 데이터 본문. 직렬화에 실패하면 경고를 남기고 빈 문자열을 씁니다.
fn audit_data<T: Serialize>(value: &T, resource: &str) -> String {
    match serde_json::to_string(value) {
        Ok(data) => data,
        Err(e) => {
            warn!("⚠️ 감사 데이터 직렬화 실패 ({}): {}", resource, e);
            String::new()
        }
    }
}
