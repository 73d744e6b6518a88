//! 공통 DTO

use serde::{Deserialize, Serialize};

/// 페이지네이션 정보
///
/// 요청 시 `pageNumber`(0부터), `pageSize`, `sort`, `sortAscending`을 받고,
/// 응답 시 `totalPages`, `totalRecords`를 채워 돌려줍니다.
///
/// ```json
/// { "pageNumber": 0, "pageSize": 10, "sort": "created", "sortAscending": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page_number: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default = "default_sort_ascending")]
    pub sort_ascending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

fn default_page_size() -> u64 {
    10
}

fn default_sort_ascending() -> bool {
    true
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: default_page_size(),
            sort: None,
            sort_ascending: default_sort_ascending(),
            total_pages: None,
            total_records: None,
        }
    }
}

impl Pagination {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size,
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort = Some(field.into());
        self.sort_ascending = ascending;
        self
    }

    /// 요청 페이지 정보에 전체 건수를 채운 응답용 페이지네이션을 만듭니다.
    pub fn with_totals(&self, total_records: u64) -> Self {
        let total_pages = if self.page_size == 0 {
            0
        } else {
            total_records.div_ceil(self.page_size)
        };

        Self {
            total_pages: Some(total_pages),
            total_records: Some(total_records),
            ..self.clone()
        }
    }
}

/// 목록 조회 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    #[serde(default)]
    pub pagination: Pagination,
    /// 환자 범위 엔티티 전용 필터
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_health_id: Option<String>,
}

impl ListRequest {
    pub fn page(page_number: u64, page_size: u64) -> Self {
        Self {
            pagination: Pagination::new(page_number, page_size),
            ..Self::default()
        }
    }

    pub fn for_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    pub fn has_patient_filter(&self) -> bool {
        self.patient_id.is_some() || self.national_health_id.is_some()
    }
}

/// 목록 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub pagination: Pagination,
    pub items: Vec<T>,
}

/// 삭제 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Pagination::new(0, 10);
        assert_eq!(page.with_totals(25).total_pages, Some(3));
        assert_eq!(page.with_totals(20).total_pages, Some(2));
        assert_eq!(page.with_totals(0).total_pages, Some(0));
        assert_eq!(page.with_totals(25).total_records, Some(25));
    }

    #[test]
    fn test_list_request_defaults() {
        let request: ListRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.pagination.page_number, 0);
        assert_eq!(request.pagination.page_size, 10);
        assert!(request.pagination.sort_ascending);
        assert!(!request.has_patient_filter());
    }

    #[test]
    fn test_pagination_wire_names() {
        let json = serde_json::to_value(Pagination::new(2, 5).sorted_by("created", false)).unwrap();
        assert_eq!(json["pageNumber"], 2);
        assert_eq!(json["pageSize"], 5);
        assert_eq!(json["sort"], "created");
        assert_eq!(json["sortAscending"], false);
        assert!(json.get("totalPages").is_none());
    }
}
