use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

pub mod heart;
pub mod sleep;
pub mod water;

/// Typed view of a raw response; missing or mistyped keys become `MalformedResponse`.
pub(crate) fn parse_response<T: DeserializeOwned>(raw: &Value, what: &str) -> Result<T> {
    T::deserialize(raw).map_err(|e| ApiError::MalformedResponse(format!("{}: {}", what, e)))
}
