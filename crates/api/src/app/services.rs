//! Service wiring for the HTTP app.

use std::sync::Arc;

use beerstock_infra::{InMemoryBeerRepository, PostgresBeerRepository};
use beerstock_inventory::{BeerRepository, StockService};

/// Long-lived services shared across requests.
pub struct AppServices {
    stock: StockService,
}

impl AppServices {
    pub fn stock(&self) -> &StockService {
        &self.stock
    }
}

/// Build the service graph, choosing the repository backend.
pub async fn build_services(database_url: Option<String>) -> anyhow::Result<AppServices> {
    let repo: Arc<dyn BeerRepository> = match database_url {
        Some(url) => {
            tracing::info!("using the postgres beer repository");
            Arc::new(PostgresBeerRepository::connect(&url).await?)
        }
        None => {
            tracing::info!("using the in-memory beer repository");
            Arc::new(InMemoryBeerRepository::new())
        }
    };

    Ok(AppServices {
        stock: StockService::new(repo),
    })
}
