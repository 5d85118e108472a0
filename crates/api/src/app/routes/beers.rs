use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use beerstock_core::BeerId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_beer).get(list_beers))
        .route("/:id", get(find_beer_by_name).delete(delete_beer))
        .route("/:id/increment", patch(increment_stock))
        .route("/:id/decrement", patch(decrement_stock))
}

pub async fn create_beer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateBeerRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            );
        }
    };

    match services.stock().create(body.into_beer()).await {
        Ok(beer) => (StatusCode::CREATED, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn list_beers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stock().list_all().await {
        Ok(beers) => {
            let body: Vec<_> = beers.into_iter().map(dto::beer_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::stock_error_to_response(e),
    }
}

// The path segment here is the unique beer name, not an id.
pub async fn find_beer_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.stock().find_by_name(&name).await {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn delete_beer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };

    match services.stock().delete_by_id(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn increment_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::QuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            );
        }
    };

    match services.stock().increment(id, body.quantity).await {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}

pub async fn decrement_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::QuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: BeerId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid beer id"),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            );
        }
    };

    match services.stock().decrement(id, body.quantity).await {
        Ok(beer) => (StatusCode::OK, Json(dto::beer_to_json(beer))).into_response(),
        Err(e) => errors::stock_error_to_response(e),
    }
}
