//! In-memory repository for tests/dev.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use beerstock_core::{Beer, BeerId, RepositoryError};
use beerstock_inventory::BeerRepository;

/// In-memory `BeerRepository`.
///
/// Ids come from a process-local counter; `find_all` returns beers in id
/// order (the store's natural order). Not intended for production.
#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    beers: RwLock<BTreeMap<BeerId, Beer>>,
    next_id: AtomicI64,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_string())
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, RepositoryError> {
        let beers = self.beers.read().map_err(|_| poisoned())?;
        Ok(beers.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError> {
        let beers = self.beers.read().map_err(|_| poisoned())?;
        Ok(beers.values().find(|b| b.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        let beers = self.beers.read().map_err(|_| poisoned())?;
        Ok(beers.values().cloned().collect())
    }

    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError> {
        let mut beers = self.beers.write().map_err(|_| poisoned())?;

        let id = match beer.id {
            Some(id) => id,
            None => BeerId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1),
        };

        let stored = Beer {
            id: Some(id),
            ..beer
        };
        beers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError> {
        let mut beers = self.beers.write().map_err(|_| poisoned())?;
        beers.remove(&id);
        Ok(())
    }
}
