//! Custom Axum extractors
//!
//! Both map their rejections onto `ApiError` so every 400 carries the
//! same `{"error": ...}` body instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::{ApiError, INVALID_PAYLOAD, INVALID_USER_ID};

/// Extract and validate a user id from path: must be a positive integer
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest {
                message: INVALID_USER_ID,
            })?;

        parse_user_id(&raw).map(Self)
    }
}

/// Parse a path segment into a user id.
pub fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest {
            message: INVALID_USER_ID,
        }),
    }
}

/// Request body bytes with buffering failures (including the size limit)
/// reported as a JSON 400 instead of axum's plain-text rejection
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            ApiError::BadRequest {
                message: INVALID_PAYLOAD,
            }
        })?;

        Ok(Self(bytes))
    }
}

/// JSON body decoded without caring about the Content-Type header
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let RawBody(bytes) = RawBody::from_request(req, state).await?;
        decode_json(&bytes).map(Self)
    }
}

/// Decode a request body, reporting any failure as a 400.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "rejecting request body");
        ApiError::BadRequest {
            message: INVALID_PAYLOAD,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpdateUserRequest;

    #[test]
    fn user_id_must_be_positive_integer() {
        assert_eq!(parse_user_id("1").ok(), Some(1));
        assert_eq!(parse_user_id("42").ok(), Some(42));
        for raw in ["abc", "", "0", "-3", "1.5", "99999999999999999999"] {
            assert!(parse_user_id(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_json::<UpdateUserRequest>(b"").is_err());
        assert!(decode_json::<UpdateUserRequest>(b"{not json").is_err());
        assert!(decode_json::<UpdateUserRequest>(br#"{"name": 5}"#).is_err());
    }

    #[test]
    fn decode_accepts_partial_update() {
        let req: UpdateUserRequest = decode_json(br#"{"email": "x@y.io"}"#).unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.email.as_deref(), Some("x@y.io"));
    }
}
