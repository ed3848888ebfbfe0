pub mod api;

use axum::{http::{header, HeaderValue, Method}, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, db::dbitems::ItemDb, docs::ApiDoc};
pub use api::create_api_routes;

/// Assemble the full application: API routes, Swagger UI, CORS and tracing
pub fn create_app(config: &Config, db: Arc<ItemDb>) -> Router {
    let app = Router::new()
        .merge(create_api_routes(db))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let app = match cors_layer(config) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_origin_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        return Some(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    if config.is_development() {
        return Some(CorsLayer::permissive());
    }

    None
}
