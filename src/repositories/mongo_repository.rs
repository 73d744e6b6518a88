//! MongoDB 리포지토리
//!
//! 엔티티를 `Document`로 변환해 저장합니다. JSON의 `id` 문자열은
//! 저장 시 `_id` ObjectId로, 조회 시 다시 `id` 문자열로 바뀝니다.
//! 타임스탬프 문자열은 BSON Date(밀리초 정밀도)로 저장되어 `$sort`가 시간순으로 동작합니다.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{FindOptions, ReplaceOptions};
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::{timestamp, Entity};

use super::{already_exists, parse_object_id, EntityRepository, FieldFilter, Page, PageQuery};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// 엔티티 하나에 대응하는 MongoDB 컬렉션
pub struct MongoRepository<E> {
    collection: Collection<Document>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> MongoRepository<E> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Document>(E::COLLECTION),
            _entity: PhantomData,
        }
    }
}

fn timestamps_to_dates(value: Bson) -> Bson {
    match value {
        Bson::String(raw) => match timestamp::parse_canonical(&raw) {
            Some(at) => Bson::DateTime(bson::DateTime::from_millis(at.timestamp_millis())),
            None => Bson::String(raw),
        },
        Bson::Document(document) => Bson::Document(map_values(document, timestamps_to_dates)),
        Bson::Array(items) => Bson::Array(items.into_iter().map(timestamps_to_dates).collect()),
        other => other,
    }
}

fn dates_to_timestamps(value: Bson) -> Bson {
    match value {
        Bson::DateTime(at) => match DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis()) {
            Some(at) => Bson::String(timestamp::format(&at)),
            None => Bson::DateTime(at),
        },
        Bson::Document(document) => Bson::Document(map_values(document, dates_to_timestamps)),
        Bson::Array(items) => Bson::Array(items.into_iter().map(dates_to_timestamps).collect()),
        other => other,
    }
}

fn map_values(document: Document, convert: fn(Bson) -> Bson) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, convert(value)))
        .collect()
}

/// 엔티티를 저장용 문서로 변환합니다.
pub fn to_storage_document<E: Entity>(entity: &E) -> AppResult<Document> {
    let document = bson::to_document(entity)
        .map_err(|e| AppError::InternalError(format!("{} 직렬화 실패: {}", E::NAME, e)))?;
    let mut document = map_values(document, timestamps_to_dates);

    document.remove("id");
    if let Some(id) = entity.id() {
        document.insert("_id", parse_object_id(id)?);
    }

    Ok(document)
}

/// 저장된 문서를 엔티티로 변환합니다.
pub fn from_storage_document<E: Entity>(document: Document) -> AppResult<E> {
    let mut document = map_values(document, dates_to_timestamps);
    if let Some(raw_id) = document.remove("_id") {
        let id = match raw_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        document.insert("id", id);
    }

    bson::from_document(document)
        .map_err(|e| AppError::DatabaseError(format!("{} 역직렬화 실패: {}", E::NAME, e)))
}

/// 필터 조건을 쿼리 문서로 변환합니다. `id` 필드는 `_id` ObjectId로 바뀝니다.
fn filter_document(filters: &[FieldFilter]) -> AppResult<Document> {
    let mut filter = Document::new();
    for f in filters {
        if f.field == "id" {
            filter.insert("_id", parse_object_id(&f.value)?);
        } else {
            filter.insert(f.field.clone(), f.value.clone());
        }
    }
    Ok(filter)
}

fn sort_document(sort: Option<&str>, ascending: bool) -> Option<Document> {
    sort.filter(|s| !s.is_empty()).map(|field| {
        let field = if field == "id" { "_id" } else { field };
        let mut sort = Document::new();
        sort.insert(field, if ascending { 1 } else { -1 });
        sort
    })
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for MongoRepository<E> {
    async fn init(&self) -> AppResult<()> {
        if E::PATIENT_SCOPED {
            let index = IndexModel::builder().keys(doc! { "patientId": 1 }).build();
            self.collection
                .create_index(index)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            info!("📇 {} patientId 인덱스 생성", E::COLLECTION);
        }
        Ok(())
    }

    async fn insert(&self, mut entity: E) -> AppResult<E> {
        if entity.id().is_none() {
            entity.set_id(ObjectId::new().to_hex());
        }

        let document = to_storage_document(&entity)?;
        let id = entity.id().unwrap_or_default().to_string();

        self.collection.insert_one(document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                already_exists::<E>(&id)
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        debug!("{} 추가: {}", E::NAME, id);
        Ok(entity)
    }

    async fn save(&self, mut entity: E) -> AppResult<E> {
        if entity.id().is_none() {
            entity.set_id(ObjectId::new().to_hex());
        }

        let document = to_storage_document(&entity)?;
        let object_id = document
            .get_object_id("_id")
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "_id": object_id }, document)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("{} 저장: {}", E::NAME, object_id.to_hex());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let object_id = parse_object_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        document.map(from_storage_document::<E>).transpose()
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let count = self
            .collection
            .count_documents(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn find_page(&self, query: &PageQuery) -> AppResult<Page<E>> {
        let filter = filter_document(&query.filters)?;

        let total_records = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut options = FindOptions::default();
        options.sort = sort_document(query.sort.as_deref(), query.ascending);
        options.skip = Some(query.skip());
        options.limit = Some(to_i64(query.page_size));

        let cursor = self
            .collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let items = documents
            .into_iter()
            .map(from_storage_document::<E>)
            .collect::<AppResult<Vec<E>>>()?;

        Ok(Page {
            items,
            total_records,
        })
    }

    async fn count_by_field(&self, field: &str, value: &str) -> AppResult<u64> {
        let filter = filter_document(&[FieldFilter {
            field: field.to_string(),
            value: value.to_string(),
        }])?;

        self.collection
            .count_documents(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
