//! Generic REST resource port.

use async_trait::async_trait;

use crate::domain::errors::ApiError;

/// CRUD access to one server collection of `T`, written through forms of type `F`.
#[async_trait]
pub trait ResourcePort<T, F>: Send + Sync
where
    T: Send + 'static,
    F: Send + Sync + 'static,
{
    /// Lists the collection, optionally with a raw query string.
    async fn list(&self, query: Option<&str>) -> Result<Vec<T>, ApiError>;

    /// Fetches one entity.
    async fn get_by_id(&self, id: &str, query: Option<&str>) -> Result<T, ApiError>;

    /// Creates an entity and returns it as stored by the server.
    async fn create(&self, form: &F) -> Result<T, ApiError>;

    /// Updates an entity and returns it as stored by the server.
    async fn update(&self, id: &str, form: &F) -> Result<T, ApiError>;

    /// Deletes an entity.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
