#[tokio::main]
async fn main() -> anyhow::Result<()> {
    beerstock_observability::init();

    let database_url = std::env::var("DATABASE_URL").ok();
    if database_url.is_none() {
        tracing::warn!("DATABASE_URL not set; beers will not survive a restart");
    }

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = beerstock_api::app::build_app(database_url).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
