use crate::{
    db::dbitems::{ItemDb, ItemDbError},
    models::{ApiError, ErrorResponse, FilterParameters, Item, ItemCreate, ItemId, ItemUpdate},
    utils::extract::{ApiJson, ApiPath, ApiQuery},
};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// List items in the requested window, filtered by minimum price
pub async fn list_items(
    State(db): State<Arc<ItemDb>>,
    ApiQuery(query): ApiQuery<FilterParameters>,
) -> Result<Json<Vec<Item>>, ApiError> {
    if query.min_price < 0.0 {
        return Err(ErrorResponse::reply(StatusCode::BAD_REQUEST, "Price cannot be negative."));
    }
    if query.offset < 0 {
        return Err(ErrorResponse::reply(StatusCode::BAD_REQUEST, "Offset cannot be negative."));
    }
    if query.limit <= 0 {
        return Err(ErrorResponse::reply(
            StatusCode::BAD_REQUEST,
            "Limit must be greater than zero.",
        ));
    }

    // Validated as non-negative above; values past usize::MAX are clamped
    let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);

    Ok(Json(db.list_items(query.min_price, offset, limit).await))
}

/// Create a new item
pub async fn create_item(
    State(db): State<Arc<ItemDb>>,
    ApiJson(payload): ApiJson<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    db.create_item(payload.name, payload.price)
        .await
        .map(Json)
        .map_err(item_db_error)
}

/// Update the name and/or price of an existing item
pub async fn update_item(
    State(db): State<Arc<ItemDb>>,
    ApiPath(item_id): ApiPath<ItemId>,
    ApiJson(payload): ApiJson<ItemUpdate>,
) -> Result<Json<Item>, ApiError> {
    db.update_item(item_id, payload)
        .await
        .map(Json)
        .map_err(item_db_error)
}

fn item_db_error(err: ItemDbError) -> ApiError {
    let status = match err {
        ItemDbError::DuplicateName(_) => StatusCode::BAD_REQUEST,
        ItemDbError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    ErrorResponse::reply(status, err.to_string())
}
