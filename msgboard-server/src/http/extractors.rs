//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// JSON body extractor whose rejections become `ApiError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Extract and validate a message id from path
pub struct MessageId(pub i64);

impl<S> FromRequestParts<S> for MessageId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("missing message id"))?;

        let id = id
            .parse::<i64>()
            .map_err(|_| ApiError::bad_request(format!("invalid message id '{}'", id)))?;

        Ok(Self(id))
    }
}
