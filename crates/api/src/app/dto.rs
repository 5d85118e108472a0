use serde::Deserialize;

use beerstock_core::{Beer, BeerKind};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateBeerRequest {
    pub name: String,
    pub brand: String,
    pub max: u64,
    pub quantity: u64,
    #[serde(rename = "type")]
    pub kind: BeerKind,
}

impl CreateBeerRequest {
    /// Turn the request into a candidate beer (no id; the store assigns one).
    pub fn into_beer(self) -> Beer {
        Beer {
            id: None,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            kind: self.kind,
        }
    }
}

/// Body for the increment/decrement operations. The amount is non-negative
/// by construction; a negative value fails deserialization.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn beer_to_json(beer: Beer) -> serde_json::Value {
    serde_json::json!({
        "id": beer.id,
        "name": beer.name,
        "brand": beer.brand,
        "quantity": beer.quantity,
        "max": beer.max,
        "type": beer.kind,
    })
}
