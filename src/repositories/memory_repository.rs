//! 메모리 리포지토리
//!
//! `STORAGE=memory`로 실행하거나 테스트에서 사용합니다. 필터와 정렬은
//! 엔티티의 JSON 표현(camelCase)을 기준으로 동작하므로 MongoDB와 같은
//! 필드 이름을 그대로 쓸 수 있습니다.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;

use super::{already_exists, parse_object_id, EntityRepository, FieldFilter, Page, PageQuery};

/// ID 순으로 정렬된 메모리 저장소
pub struct InMemoryRepository<E> {
    records: RwLock<BTreeMap<String, E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<String, E>>> {
        self.records
            .read()
            .map_err(|_| AppError::InternalError(format!("{} 저장소 잠금 실패", E::NAME)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<String, E>>> {
        self.records
            .write()
            .map_err(|_| AppError::InternalError(format!("{} 저장소 잠금 실패", E::NAME)))
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// `a.b.c` 경로의 값을 찾습니다.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
}

fn matches_filter(value: &Value, filter: &FieldFilter) -> bool {
    match lookup(value, &filter.field) {
        Some(Value::String(s)) => s == &filter.value,
        Some(Value::Array(items)) => items.iter().any(|item| match item {
            Value::String(s) => s == &filter.value,
            other => other.to_string() == filter.value,
        }),
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == filter.value,
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// JSON 값 비교. 타입이 다르면 Null < Bool < Number < String 순입니다.
pub(crate) fn compare_json(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn to_json<E: Entity>(entity: &E) -> AppResult<Value> {
    serde_json::to_value(entity)
        .map_err(|e| AppError::InternalError(format!("{} 직렬화 실패: {}", E::NAME, e)))
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E> {
    async fn insert(&self, mut entity: E) -> AppResult<E> {
        let id = match entity.id() {
            Some(id) => parse_object_id(id)?.to_hex(),
            None => ObjectId::new().to_hex(),
        };
        entity.set_id(id.clone());

        match self.write()?.entry(id) {
            Entry::Occupied(existing) => Err(already_exists::<E>(existing.key())),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                Ok(entity)
            }
        }
    }

    async fn save(&self, mut entity: E) -> AppResult<E> {
        let id = match entity.id() {
            Some(id) => parse_object_id(id)?.to_hex(),
            None => ObjectId::new().to_hex(),
        };
        entity.set_id(id.clone());

        self.write()?.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        let key = parse_object_id(id)?.to_hex();
        Ok(self.read()?.get(&key).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let key = parse_object_id(id)?.to_hex();
        Ok(self.read()?.contains_key(&key))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let key = parse_object_id(id)?.to_hex();
        Ok(self.write()?.remove(&key).is_some())
    }

    async fn find_page(&self, query: &PageQuery) -> AppResult<Page<E>> {
        let records: Vec<E> = self.read()?.values().cloned().collect();

        let mut matched: Vec<(Value, E)> = Vec::new();
        for entity in records {
            let json = to_json(&entity)?;
            if query.filters.iter().all(|f| matches_filter(&json, f)) {
                matched.push((json, entity));
            }
        }

        if let Some(sort) = query.sort.as_deref().filter(|s| !s.is_empty()) {
            matched.sort_by(|(a, _), (b, _)| {
                let a = lookup(a, sort).unwrap_or(&Value::Null);
                let b = lookup(b, sort).unwrap_or(&Value::Null);
                let ordering = compare_json(a, b);
                if query.ascending { ordering } else { ordering.reverse() }
            });
        }

        let total_records = matched.len() as u64;
        let skip = usize::try_from(query.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.page_size).unwrap_or(usize::MAX);

        let items = matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, entity)| entity)
            .collect();

        Ok(Page {
            items,
            total_records,
        })
    }

    async fn count_by_field(&self, field: &str, value: &str) -> AppResult<u64> {
        let filter = FieldFilter {
            field: field.to_string(),
            value: value.to_string(),
        };

        let guard = self.read()?;
        let mut count = 0;
        for entity in guard.values() {
            if matches_filter(&to_json(entity)?, &filter) {
                count += 1;
            }
        }
        Ok(count)
    }
}
