//! Error types for `fssp-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown proceeding status: {0:?}")]
  UnknownStatus(String),

  #[error("registry lookup failed: {0}")]
  Registry(String),

  #[error("notification failed: {0}")]
  Notification(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
