//! # Request Extractors
//!
//! Extractors that keep request decoding inside the service's error contract:
//! a body never causes a rejection, and a malformed id behaves like an
//! unknown route.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::AppError;

/// The request body as a JSON object.
///
/// An empty, unreadable, malformed or non-object body is presented as an
/// empty object. `Content-Type` is not checked.
#[derive(Debug, Default)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to read request body, treating as empty");
                return Ok(Self::default());
            }
        };

        if bytes.is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => {
                debug!("Request body is not a JSON object, treating as empty");
                Ok(Self::default())
            }
            Err(e) => {
                debug!(error = %e, "Request body is not valid JSON, treating as empty");
                Ok(Self::default())
            }
        }
    }
}

/// The `{id}` path segment of a todo route.
///
/// Only plain ASCII decimal digits are accepted. Anything else is rejected
/// with [`AppError::NotFound`]. Digit strings too large for `u64` saturate to
/// `u64::MAX`, an id no todo ever has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub u64);

impl TodoId {
    /// Parses a path segment into a todo id.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(raw.parse().unwrap_or(u64::MAX)))
    }
}

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "Missing todo id path parameter");
                AppError::NotFound
            })?;

        Self::parse(&raw).ok_or_else(|| {
            debug!(%raw, "Todo id is not a non-negative integer");
            AppError::NotFound
        })
    }
}
