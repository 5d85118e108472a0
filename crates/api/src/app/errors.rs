use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use beerstock_core::StockError;

/// Map a service error to its fixed HTTP status.
pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    match err {
        err @ StockError::AlreadyRegistered(_) => {
            json_error(StatusCode::CONFLICT, "already_registered", err.to_string())
        }
        StockError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "beer not found"),
        StockError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        StockError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        err @ StockError::StockExceeded { .. } => {
            json_error(StatusCode::BAD_REQUEST, "stock_exceeded", err.to_string())
        }
        err @ StockError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", err.to_string())
        }
        StockError::Repository(e) => {
            tracing::error!(error = %e, "repository failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
