//! Debtor records — the single entity the tracker persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ProceedingStatus;

/// A debtor-check request as stored.
///
/// Only `status` ever changes after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorRecord {
  /// Store-assigned, monotonically increasing.
  pub id:          i64,
  /// Correlation key from the CRM. Not unique.
  pub client_id:   String,
  pub debtor_name: String,
  /// Date of birth exactly as submitted; never parsed.
  pub debtor_dob:  String,
  /// Enforcement-proceeding identifier.
  pub ip_number:   Option<String>,
  pub status:      ProceedingStatus,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::DebtorStore::insert`].
///
/// `id`, `status` and `created_at` are always set by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDebtor {
  pub client_id:   String,
  pub debtor_name: String,
  pub debtor_dob:  String,
  #[serde(default)]
  pub ip_number:   Option<String>,
}
