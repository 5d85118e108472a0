//! The stock service: create, lookup, list, delete, and bounded quantity
//! arithmetic over the repository collaborator.

use std::sync::Arc;

use tracing::{debug, info};

use beerstock_core::{Beer, BeerId, StockError, StockResult};

use crate::repository::BeerRepository;

/// Owns the stock business rules.
///
/// All durable state lives behind the repository; the service holds no cache.
/// Reads and the subsequent bounds check are not coordinated with a lock, so
/// concurrent adjustments of the same beer race; single-writer-per-item
/// semantics are delegated to the backing store.
#[derive(Clone)]
pub struct StockService {
    repo: Arc<dyn BeerRepository>,
}

impl StockService {
    pub fn new(repo: Arc<dyn BeerRepository>) -> Self {
        Self { repo }
    }

    /// Register a new beer. Fails if the name is already taken.
    pub async fn create(&self, beer: Beer) -> StockResult<Beer> {
        beer.validate()?;

        if self.repo.find_by_name(&beer.name).await?.is_some() {
            return Err(StockError::already_registered(beer.name));
        }

        // The store assigns the id; any caller-supplied one is discarded.
        let created = self.repo.save(Beer { id: None, ..beer }).await?;
        info!(name = %created.name, id = ?created.id, "beer registered");
        Ok(created)
    }

    /// Look a beer up by its unique name.
    pub async fn find_by_name(&self, name: &str) -> StockResult<Beer> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or(StockError::NotFound)
    }

    /// All stored beers, in the store's natural order.
    pub async fn list_all(&self) -> StockResult<Vec<Beer>> {
        Ok(self.repo.find_all().await?)
    }

    /// Remove a beer by id.
    pub async fn delete_by_id(&self, id: BeerId) -> StockResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StockError::NotFound)?;
        self.repo.delete_by_id(id).await?;
        info!(%id, "beer deleted");
        Ok(())
    }

    /// Add `amount` to the stored quantity, keeping it within max capacity.
    pub async fn increment(&self, id: BeerId, amount: u64) -> StockResult<Beer> {
        let mut beer = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(StockError::NotFound)?;

        beer.quantity = beer.incremented(amount)?;
        let updated = self.repo.save(beer).await?;
        debug!(%id, amount, quantity = updated.quantity, "stock incremented");
        Ok(updated)
    }

    /// Remove `amount` from the stored quantity; draining to zero is allowed.
    pub async fn decrement(&self, id: BeerId, amount: u64) -> StockResult<Beer> {
        let mut beer = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(StockError::NotFound)?;

        beer.quantity = beer.decremented(amount)?;
        let updated = self.repo.save(beer).await?;
        debug!(%id, amount, quantity = updated.quantity, "stock decremented");
        Ok(updated)
    }
}
