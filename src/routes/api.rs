use crate::{db::dbitems::ItemDb, handlers::{create_item, health_check, list_items, update_item}};
use axum::{routing::{get, put}, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(db: Arc<ItemDb>) -> Router {
    Router::<Arc<ItemDb>>::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route("/items/:item_id", put(update_item))
        .with_state(db)
}
