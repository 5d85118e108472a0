//! Repository port for beer persistence.

use std::sync::Arc;

use async_trait::async_trait;

use beerstock_core::{Beer, BeerId, RepositoryError};

/// Key/value-style persistence capability consumed by the stock service.
///
/// Any conforming backend can implement this (an in-memory map for tests, a
/// relational database in production). Implementations must treat `name` as
/// unique among stored beers and return `find_all` results in the store's
/// natural order.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError>;

    /// Persist the beer. A beer without an id is inserted and the store
    /// assigns one; a beer with an id replaces the stored record.
    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError>;

    async fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R> BeerRepository for Arc<R>
where
    R: BeerRepository + ?Sized,
{
    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError> {
        (**self).find_by_name(name).await
    }

    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        (**self).find_all().await
    }

    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError> {
        (**self).save(beer).await
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id).await
    }
}
