//! Functionality for using `urlparam` with `axum`.
//!
//! Enable with the `axum` feature.

use axum_framework as axum;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use crate::{Config, Record};

pub use crate::web::QueryParams;

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: Record + Default + Send,
    S: Send + Sync,
{
    type Rejection = QueryParamsRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts.extensions.get::<Config>().cloned().unwrap_or_default();
        let query = parts.uri.query().unwrap_or_default();
        let record = config
            .deserialize_str(query)
            .map_err(QueryParamsRejection::new)?;
        Ok(QueryParams(record))
    }
}

/// Rejection used by [`QueryParams`] when the querystring cannot be decoded.
///
/// Responds with `400 Bad Request` and the error text as body.
#[derive(Debug)]
pub struct QueryParamsRejection {
    error: crate::Error,
}

impl QueryParamsRejection {
    pub fn new(error: crate::Error) -> Self {
        QueryParamsRejection { error }
    }

    pub fn error(&self) -> &crate::Error {
        &self.error
    }
}

impl std::fmt::Display for QueryParamsRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to deserialize query string. Error: {}",
            self.error,
        )
    }
}

impl std::error::Error for QueryParamsRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl IntoResponse for QueryParamsRejection {
    fn into_response(self) -> Response {
        let mut res = self.to_string().into_response();
        *res.status_mut() = StatusCode::BAD_REQUEST;
        res
    }
}
