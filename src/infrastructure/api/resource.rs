//! REST collection adapter.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::client::ApiClient;
use crate::domain::entities::{Label, LabelForm, LabelKind};
use crate::domain::errors::ApiError;
use crate::domain::ports::ResourcePort;

/// `GET/POST/PUT/DELETE /<resource>[/:id]` over the authenticated client.
pub struct RestResource<T, F> {
    client: Arc<ApiClient>,
    path: String,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> RestResource<T, F> {
    /// Creates adapter for the collection at `path`.
    #[must_use]
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into().trim_matches('/').to_string(),
            _marker: PhantomData,
        }
    }

    fn collection_path(&self, query: Option<&str>) -> String {
        with_query(self.path.clone(), query)
    }

    fn item_path(&self, id: &str, query: Option<&str>) -> String {
        with_query(format!("{}/{}", self.path, urlencoding::encode(id)), query)
    }
}

impl RestResource<Label, LabelForm> {
    /// Adapter for one label category.
    #[must_use]
    pub fn for_labels(client: Arc<ApiClient>, kind: LabelKind) -> Self {
        Self::new(client, kind.resource())
    }
}

fn with_query(path: String, query: Option<&str>) -> String {
    match query.map(|q| q.trim_start_matches('?')).filter(|q| !q.is_empty()) {
        Some(query) => format!("{path}?{query}"),
        None => path,
    }
}

#[async_trait]
impl<T, F> ResourcePort<T, F> for RestResource<T, F>
where
    T: DeserializeOwned + Send + 'static,
    F: Serialize + Send + Sync + 'static,
{
    async fn list(&self, query: Option<&str>) -> Result<Vec<T>, ApiError> {
        debug!(resource = %self.path, "Listing collection");
        self.client
            .get_json(&self.collection_path(query))
            .await
            .inspect_err(|e| warn!(resource = %self.path, error = %e, "Failed to list collection"))
    }

    async fn get_by_id(&self, id: &str, query: Option<&str>) -> Result<T, ApiError> {
        debug!(resource = %self.path, id, "Fetching entity");
        self.client
            .get_json(&self.item_path(id, query))
            .await
            .inspect_err(|e| warn!(resource = %self.path, id, error = %e, "Failed to fetch entity"))
    }

    async fn create(&self, form: &F) -> Result<T, ApiError> {
        debug!(resource = %self.path, "Creating entity");
        self.client
            .send_json(Method::POST, &self.path, form)
            .await
            .inspect_err(|e| warn!(resource = %self.path, error = %e, "Failed to create entity"))
    }

    async fn update(&self, id: &str, form: &F) -> Result<T, ApiError> {
        debug!(resource = %self.path, id, "Updating entity");
        self.client
            .send_json(Method::PUT, &self.item_path(id, None), form)
            .await
            .inspect_err(|e| warn!(resource = %self.path, id, error = %e, "Failed to update entity"))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!(resource = %self.path, id, "Deleting entity");
        self.client
            .delete(&self.item_path(id, None))
            .await
            .inspect_err(|e| warn!(resource = %self.path, id, error = %e, "Failed to delete entity"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthToken;
    use crate::domain::ports::mocks::MockTokenStorage;
    use crate::infrastructure::api::test_server::{StubResponse, StubServer};
    use std::time::Duration;

    async fn cookbooks(server: &StubServer) -> RestResource<Label, LabelForm> {
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new_unchecked("tok")));
        let client =
            Arc::new(ApiClient::with_config(server.base_url(), Duration::from_secs(2), storage).unwrap());
        RestResource::for_labels(client, LabelKind::Cookbooks)
    }

    #[test]
    fn test_paths() {
        assert_eq!(with_query("cookBooks".to_string(), None), "cookBooks");
        assert_eq!(with_query("cookBooks".to_string(), Some("")), "cookBooks");
        assert_eq!(
            with_query("cookBooks".to_string(), Some("?sort=name")),
            "cookBooks?sort=name"
        );
    }

    #[tokio::test]
    async fn test_item_id_is_a_single_segment() {
        let server = StubServer::start(vec![StubResponse::json(200, "{}")]).await;
        let resource = cookbooks(&server).await;

        resource.delete("a/b?c#d").await.unwrap();

        assert_eq!(server.requests().await[0].path, "/cookBooks/a%2Fb%3Fc%23d");
    }

    #[tokio::test]
    async fn test_list_with_query() {
        let server = StubServer::start(vec![StubResponse::json(
            200,
            r#"[{"_id":"1","name":"Nonna"},{"_id":"2","name":"Vegan"}]"#,
        )])
        .await;
        let resource = cookbooks(&server).await;

        let labels = resource.list(Some("limit=2")).await.unwrap();

        assert_eq!(labels, vec![Label::new("1", "Nonna"), Label::new("2", "Vegan")]);
        let requests = server.requests().await;
        assert_eq!(requests[0].path, "/cookBooks?limit=2");
        assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let server =
            StubServer::start(vec![StubResponse::json(200, r#"{"_id":"7","name":"Estate"}"#)]).await;
        let resource = cookbooks(&server).await;

        let label = resource.get_by_id("7", None).await.unwrap();

        assert_eq!(label, Label::new("7", "Estate"));
        assert_eq!(server.requests().await[0].path, "/cookBooks/7");
    }

    #[tokio::test]
    async fn test_create_posts_name_only() {
        let server =
            StubServer::start(vec![StubResponse::json(201, r#"{"_id":"abc","name":"Dairy"}"#)]).await;
        let resource = cookbooks(&server).await;

        let created = resource.create(&LabelForm::create("Dairy")).await.unwrap();

        assert_eq!(created, Label::new("abc", "Dairy"));
        let request = &server.requests().await[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/cookBooks");
        assert_eq!(request.body, r#"{"name":"Dairy"}"#);
    }

    #[tokio::test]
    async fn test_update_puts_id_and_name() {
        let server =
            StubServer::start(vec![StubResponse::json(200, r#"{"_id":"abc","name":"Milk"}"#)]).await;
        let resource = cookbooks(&server).await;

        let updated = resource
            .update("abc", &LabelForm::update("abc", "Milk"))
            .await
            .unwrap();

        assert_eq!(updated.name(), "Milk");
        let request = &server.requests().await[0];
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/cookBooks/abc");
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({"_id": "abc", "name": "Milk"}));
    }

    #[tokio::test]
    async fn test_delete() {
        let server = StubServer::start(vec![StubResponse::json(200, "{}")]).await;
        let resource = cookbooks(&server).await;

        resource.delete("abc").await.unwrap();

        let request = &server.requests().await[0];
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/cookBooks/abc");
    }
}
