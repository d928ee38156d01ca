//! Enforcement-proceeding status and the rule that derives it from a
//! proceeding identifier.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The state of an enforcement proceeding as last reported by the registry.
///
/// The serde names double as the strings stored in the `status` column.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum ProceedingStatus {
  /// Recorded but not yet checked against the registry.
  #[default]
  #[serde(rename = "unverified")]
  Unverified,
  /// The debt has been paid off.
  #[serde(rename = "completed")]
  Completed,
  #[serde(rename = "terminated")]
  Terminated,
  #[serde(rename = "in progress")]
  InProgress,
  /// The registry has no proceeding for the identifier (or none was given).
  #[serde(rename = "not found")]
  NotFound,
}

impl ProceedingStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Unverified => "unverified",
      Self::Completed => "completed",
      Self::Terminated => "terminated",
      Self::InProgress => "in progress",
      Self::NotFound => "not found",
    }
  }

  /// Derive a status from a proceeding identifier.
  ///
  /// The checks form a priority cascade and the first match wins, so an
  /// identifier containing both `"123"` and `"456"` is `Completed`. An empty
  /// identifier is treated the same as a missing one.
  pub fn classify(ip_number: Option<&str>) -> Self {
    match ip_number {
      Some(ip) if ip.contains("123") => Self::Completed,
      Some(ip) if ip.contains("456") => Self::Terminated,
      Some(ip) if !ip.is_empty() => Self::InProgress,
      _ => Self::NotFound,
    }
  }
}

impl fmt::Display for ProceedingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ProceedingStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "unverified" => Ok(Self::Unverified),
      "completed" => Ok(Self::Completed),
      "terminated" => Ok(Self::Terminated),
      "in progress" => Ok(Self::InProgress),
      "not found" => Ok(Self::NotFound),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}
