//! Stock service and repository port for the beer inventory.
//!
//! Business rules live here, implemented on top of the `BeerRepository`
//! capability (no HTTP, no storage specifics).

pub mod repository;
pub mod service;

pub use repository::BeerRepository;
pub use service::StockService;
