//! `BeerRepository` adapters.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryBeerRepository;
pub use postgres::PostgresBeerRepository;
