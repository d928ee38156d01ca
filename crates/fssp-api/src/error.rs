//! API error types and [`axum::response::IntoResponse`] implementations.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// A failure anywhere in the check flow before notifications are queued.
///
/// The caller only ever sees a generic 500; the cause goes to the log.
#[derive(Debug, Error)]
pub enum CheckError {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("registry error: {0}")]
  Registry(#[from] fssp_core::Error),

  #[error("response encoding error: {0}")]
  Encode(#[from] serde_json::Error),
}

impl CheckError {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for CheckError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "debtor check failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(json!({ "detail": "Internal server error" })),
    )
      .into_response()
  }
}

/// A store failure on an inspection endpoint.
///
/// Reported in the body as `{"error": ...}` rather than through the status
/// code.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct InspectError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl InspectError {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self(Box::new(e))
  }
}

impl IntoResponse for InspectError {
  fn into_response(self) -> Response {
    tracing::warn!(error = %self.0, "inspection request failed");
    (StatusCode::OK, Json(json!({ "error": self.0.to_string() }))).into_response()
  }
}
