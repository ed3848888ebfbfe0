use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// List items in a window of the store, filtered by minimum price
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(FilterParameters),
    responses(
        (status = 200, description = "Items in the requested window", body = [Item]),
        (status = 400, description = "Negative min_price or offset, or non-positive limit", body = ErrorResponse),
        (status = 422, description = "Malformed or unknown query parameter", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Item created successfully", body = Item),
        (status = 400, description = "An item with this name already exists", body = ErrorResponse),
        (status = 422, description = "Name shorter than 3 characters or negative price", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Update an existing item
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "Item id, ids that match no item yield 404")
    ),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, description = "An item with this name already exists", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid name or price, or a non-integer id", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        list_items_doc,
        create_item_doc,
        update_item_doc,
    ),
    components(
        schemas(HealthResponse, Item, ItemCreate, ItemUpdate, ErrorResponse)
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "items", description = "Item catalogue")
    )
)]
pub struct ApiDoc;
