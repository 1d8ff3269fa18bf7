//! Request extractors that reject with `ApiError`.

use axum::extract::{FromRequest, FromRequestParts, Path};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

/// JSON body; malformed payloads become a 400 `VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Transaction ID path segment; anything but a UUID becomes a 400.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct TransactionId(pub Uuid);
