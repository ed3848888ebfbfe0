use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{ApiError, ErrorResponse};

/// `Json` extractor answering malformed bodies with an `ErrorResponse`
pub struct ApiJson<T>(pub T);

/// `Query` extractor answering malformed query strings with an `ErrorResponse`
pub struct ApiQuery<T>(pub T);

/// `Path` extractor answering malformed path segments with an `ErrorResponse`
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(path_rejection(rejection)),
        }
    }
}

// Schema violations in the body are always 422, invalid JSON included.
fn json_rejection(rejection: JsonRejection) -> ApiError {
    let status = match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => rejection.status(),
    };
    debug!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::reply(status, rejection.body_text())
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    debug!("Rejected query string: {}", rejection.body_text());
    ErrorResponse::reply(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

fn path_rejection(rejection: PathRejection) -> ApiError {
    let status = match &rejection {
        PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => rejection.status(),
    };
    debug!("Rejected path parameters: {}", rejection.body_text());
    ErrorResponse::reply(status, rejection.body_text())
}
