//! Postgres-backed repository.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use beerstock_core::{Beer, BeerId, BeerKind, RepositoryError};
use beerstock_inventory::BeerRepository;

/// Postgres-backed `BeerRepository`.
///
/// The `name` column carries a unique constraint, mirroring the domain rule
/// that names are unique among stored beers. All queries are runtime-checked.
#[derive(Debug, Clone)]
pub struct PostgresBeerRepository {
    pool: PgPool,
}

impl PostgresBeerRepository {
    /// Connect to the database and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(storage_error)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS beers (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                brand TEXT NOT NULL,
                quantity BIGINT NOT NULL,
                max_capacity BIGINT NOT NULL,
                beer_type TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(storage_error)?;

        tracing::info!("connected to postgres beer store");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (the schema is assumed to be in place).
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn to_db(value: u64) -> Result<i64, RepositoryError> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::Data(format!("quantity {value} out of range for storage")))
}

fn from_db(value: i64) -> Result<u64, RepositoryError> {
    u64::try_from(value)
        .map_err(|_| RepositoryError::Data(format!("negative quantity {value} in store")))
}

fn row_to_beer(row: &PgRow) -> Result<Beer, RepositoryError> {
    let kind: String = row.try_get("beer_type").map_err(storage_error)?;
    let kind: BeerKind = kind
        .parse()
        .map_err(|e| RepositoryError::Data(format!("beer_type: {e}")))?;

    Ok(Beer {
        id: Some(BeerId::new(
            row.try_get::<i64, _>("id").map_err(storage_error)?,
        )),
        name: row.try_get("name").map_err(storage_error)?,
        brand: row.try_get("brand").map_err(storage_error)?,
        quantity: from_db(row.try_get::<i64, _>("quantity").map_err(storage_error)?)?,
        max: from_db(row.try_get::<i64, _>("max_capacity").map_err(storage_error)?)?,
        kind,
    })
}

#[async_trait]
impl BeerRepository for PostgresBeerRepository {
    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, brand, quantity, max_capacity, beer_type FROM beers WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_beer).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, brand, quantity, max_capacity, beer_type FROM beers WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_beer).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, brand, quantity, max_capacity, beer_type FROM beers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_beer).collect()
    }

    async fn save(&self, beer: Beer) -> Result<Beer, RepositoryError> {
        match beer.id {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO beers (name, brand, quantity, max_capacity, beer_type)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&beer.name)
                .bind(&beer.brand)
                .bind(to_db(beer.quantity)?)
                .bind(to_db(beer.max)?)
                .bind(beer.kind.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(storage_error)?;

                let id: i64 = row.try_get("id").map_err(storage_error)?;
                Ok(Beer {
                    id: Some(BeerId::new(id)),
                    ..beer
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE beers
                    SET name = $2, brand = $3, quantity = $4, max_capacity = $5, beer_type = $6
                    WHERE id = $1
                    "#,
                )
                .bind(id.as_i64())
                .bind(&beer.name)
                .bind(&beer.brand)
                .bind(to_db(beer.quantity)?)
                .bind(to_db(beer.max)?)
                .bind(beer.kind.as_str())
                .execute(&self.pool)
                .await
                .map_err(storage_error)?;

                Ok(beer)
            }
        }
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM beers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
