//! 엔티티 CRUD 클라이언트

use std::marker::PhantomData;

use reqwest::Method;

use crate::domain::dto::{DeleteResponse, ListRequest, ListResponse};
use crate::domain::entities::Entity;

use super::{CallCredentials, CallSite, ClientError, OpenCdxClient};

/// 호출별 에러 코드
pub mod call_codes {
    pub const CREATE: i32 = 1;
    pub const GET: i32 = 2;
    pub const UPDATE: i32 = 3;
    pub const DELETE: i32 = 4;
    pub const LIST: i32 = 5;
}

/// 엔티티 하나의 REST 경로에 대한 클라이언트
///
/// 에러의 컴포넌트 이름은 `"<표시 이름>Client"`입니다 (`AllergyClient`, `BPMClient`).
#[derive(Debug, Clone)]
pub struct EntityClient<E> {
    channel: OpenCdxClient,
    path: String,
    component: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityClient<E> {
    pub fn new(channel: OpenCdxClient, path: impl Into<String>) -> Self {
        Self {
            channel,
            path: path.into().trim_end_matches('/').to_string(),
            component: format!("{}Client", E::NAME),
            _entity: PhantomData,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    fn site(&self, error_code: i32) -> CallSite<'_> {
        CallSite::new(&self.component, error_code)
    }

    pub async fn create(&self, entity: &E, credentials: &CallCredentials) -> Result<E, ClientError> {
        self.channel
            .call(Method::POST, &self.path, Some(entity), credentials, self.site(call_codes::CREATE))
            .await
    }

    pub async fn get(&self, id: &str, credentials: &CallCredentials) -> Result<E, ClientError> {
        let path = format!("{}/{}", self.path, id);
        self.channel
            .call::<(), E>(Method::GET, &path, None, credentials, self.site(call_codes::GET))
            .await
    }

    pub async fn update(&self, entity: &E, credentials: &CallCredentials) -> Result<E, ClientError> {
        self.channel
            .call(Method::PUT, &self.path, Some(entity), credentials, self.site(call_codes::UPDATE))
            .await
    }

    pub async fn delete(&self, id: &str, credentials: &CallCredentials) -> Result<DeleteResponse, ClientError> {
        let path = format!("{}/{}", self.path, id);
        self.channel
            .call::<(), DeleteResponse>(Method::DELETE, &path, None, credentials, self.site(call_codes::DELETE))
            .await
    }

    pub async fn list(
        &self,
        request: &ListRequest,
        credentials: &CallCredentials,
    ) -> Result<ListResponse<E>, ClientError> {
        let path = format!("{}/list", self.path);
        self.channel
            .call(Method::POST, &path, Some(request), credentials, self.site(call_codes::LIST))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;
    use crate::core::status::RpcCode;
    use crate::domain::dto::Pagination;
    use crate::domain::entities::{Bpm, Country};
    use crate::test_support::sample_country;

    const ID: &str = "65f1c0c2a7b4d3e2f1a0b9c8";

    fn countries(server: &MockServer) -> EntityClient<Country> {
        let channel = OpenCdxClient::new(ClientConfig::new(server.uri())).unwrap();
        EntityClient::new(channel, "/country")
    }

    fn credentials() -> CallCredentials {
        CallCredentials::bearer("token-1")
    }

    #[tokio::test]
    async fn test_create_sends_bearer_and_body() {
        let server = MockServer::start().await;
        let mut stored = sample_country("Korea", "KR");
        stored.id = Some(ID.to_string());

        Mock::given(method("POST"))
            .and(path("/country"))
            .and(header("Authorization", "Bearer token-1"))
            .and(body_partial_json(serde_json::json!({ "name": "Korea", "isoCode": "KR" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .expect(1)
            .mount(&server)
            .await;

        let created = countries(&server)
            .create(&sample_country("Korea", "KR"), &credentials())
            .await
            .unwrap();
        assert_eq!(created, stored);
    }

    #[tokio::test]
    async fn test_error_body_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/country/{}", ID)))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "Not found",
                "code": 5,
                "status": "NOT_FOUND",
                "message": "Country: missing",
                "details": ["id"]
            })))
            .mount(&server)
            .await;

        let error = countries(&server).get(ID, &credentials()).await.unwrap_err();
        assert_eq!(error.code, RpcCode::NotFound);
        assert_eq!(error.code.as_i32(), 5);
        assert_eq!(error.component, "CountryClient");
        assert_eq!(error.error_code, call_codes::GET);
        assert_eq!(error.message, "Country: missing");
        assert_eq!(error.details, vec!["id".to_string()]);
    }

    #[tokio::test]
    async fn test_each_call_has_its_code() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "code": 7,
                "message": "denied"
            })))
            .mount(&server)
            .await;

        let client = countries(&server);
        let mut country = sample_country("Korea", "KR");
        country.id = Some(ID.to_string());

        let codes = [
            client.create(&country, &credentials()).await.unwrap_err().error_code,
            client.get(ID, &credentials()).await.unwrap_err().error_code,
            client.update(&country, &credentials()).await.unwrap_err().error_code,
            client.delete(ID, &credentials()).await.unwrap_err().error_code,
            client
                .list(&ListRequest::page(0, 10), &credentials())
                .await
                .unwrap_err()
                .error_code,
        ];
        assert_eq!(codes, [1, 2, 3, 4, 5]);

        let error = client.get(ID, &credentials()).await.unwrap_err();
        assert_eq!(error.code, RpcCode::PermissionDenied);
    }

    #[tokio::test]
    async fn test_list_and_delete_decode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/country/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": { "pageNumber": 0, "pageSize": 10, "sortAscending": true, "totalPages": 1, "totalRecords": 1 },
                "items": [{ "id": ID, "name": "Korea", "isoCode": "KR" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/country/{}", ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": format!("Country: {} is deleted.", ID)
            })))
            .mount(&server)
            .await;

        let client = countries(&server);
        let list = client
            .list(&ListRequest { pagination: Pagination::new(0, 10), ..ListRequest::default() }, &credentials())
            .await
            .unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.pagination.total_records, Some(1));

        let deleted = client.delete(ID, &credentials()).await.unwrap();
        assert!(deleted.success);
    }

    #[tokio::test]
    async fn test_plain_error_and_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/vitals/bpm/{}", ID)))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/vitals/bpm/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let channel = OpenCdxClient::new(ClientConfig::new(server.uri())).unwrap();
        let client = EntityClient::<Bpm>::new(channel, "/vitals/bpm/");
        assert_eq!(client.component(), "BPMClient");

        let error = client.get(ID, &credentials()).await.unwrap_err();
        assert_eq!(error.code, RpcCode::Unavailable);
        assert_eq!(error.message, "upstream unavailable");

        let error = client
            .list(&ListRequest::page(0, 10), &credentials())
            .await
            .unwrap_err();
        assert_eq!(error.code, RpcCode::Internal);
        assert_eq!(error.error_code, call_codes::LIST);
    }

    #[tokio::test]
    async fn test_transport_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let slow = OpenCdxClient::new(
            ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let error = EntityClient::<Country>::new(slow, "/country")
            .get(ID, &credentials())
            .await
            .unwrap_err();
        assert_eq!(error.code, RpcCode::DeadlineExceeded);
        assert!(error.source.is_some());

        let refused = OpenCdxClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let error = EntityClient::<Country>::new(refused, "/country")
            .get(ID, &credentials())
            .await
            .unwrap_err();
        assert_eq!(error.code, RpcCode::Unavailable);
    }
}
