//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and statuses by their display
//! name (`"in progress"`, `"not found"`, ...). Rows written by the older
//! tracker carry SQLite's `CURRENT_TIMESTAMP` form and Russian status names;
//! both still decode.

use chrono::{DateTime, NaiveDateTime, Utc};
use fssp_core::{debtor::DebtorRecord, status::ProceedingStatus};

use crate::{Error, Result};

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

/// `CURRENT_TIMESTAMP` output, always UTC.
const SQLITE_DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  match DateTime::parse_from_rfc3339(s) {
    Ok(dt) => Ok(dt.with_timezone(&Utc)),
    Err(rfc_err) => NaiveDateTime::parse_from_str(s, SQLITE_DT_FORMAT)
      .map(|naive| naive.and_utc())
      .map_err(|_| Error::DateParse(format!("{s:?}: {rfc_err}"))),
  }
}

// ─── ProceedingStatus ─────────────────────────────────────────────────────────

pub fn encode_status(s: ProceedingStatus) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<ProceedingStatus> {
  let legacy = match s {
    "Не проверен" => Some(ProceedingStatus::Unverified),
    "Исполнено" => Some(ProceedingStatus::Completed),
    "Прекращено" => Some(ProceedingStatus::Terminated),
    "Исполняется" => Some(ProceedingStatus::InProgress),
    "Не найден" => Some(ProceedingStatus::NotFound),
    _ => None,
  };
  match legacy {
    Some(status) => Ok(status),
    None => Ok(s.parse::<ProceedingStatus>()?),
  }
}

// ─── Raw rows ─────────────────────────────────────────────────────────────────

/// Column order expected by [`RawDebtor::from_row`].
pub const DEBTOR_COLUMNS: &str =
  "id, client_id, debtor_name, debtor_dob, ip_number, status, created_at";

/// A `debtors` row as read from SQLite, before decoding.
pub struct RawDebtor {
  pub id:          i64,
  pub client_id:   String,
  pub debtor_name: String,
  pub debtor_dob:  String,
  pub ip_number:   Option<String>,
  /// Nullable in tables created by the older tracker.
  pub status:      Option<String>,
  pub created_at:  String,
}

impl RawDebtor {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      client_id:   row.get(1)?,
      debtor_name: row.get(2)?,
      debtor_dob:  row.get(3)?,
      ip_number:   row.get(4)?,
      status:      row.get(5)?,
      created_at:  row.get(6)?,
    })
  }

  pub fn into_record(self) -> Result<DebtorRecord> {
    Ok(DebtorRecord {
      id:          self.id,
      client_id:   self.client_id,
      debtor_name: self.debtor_name,
      debtor_dob:  self.debtor_dob,
      ip_number:   self.ip_number,
      status:      match self.status.as_deref() {
        Some(s) => decode_status(s)?,
        None => ProceedingStatus::Unverified,
      },
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}
