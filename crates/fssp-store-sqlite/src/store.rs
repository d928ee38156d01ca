//! [`SqliteStore`] — the SQLite implementation of [`DebtorStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use fssp_core::{
  debtor::{DebtorRecord, NewDebtor},
  status::ProceedingStatus,
  store::DebtorStore,
};

use crate::{
  encode::{DEBTOR_COLUMNS, RawDebtor, encode_dt, encode_status},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A debtor store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DebtorStore impl ────────────────────────────────────────────────────────

impl DebtorStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewDebtor) -> Result<DebtorRecord> {
    let created_at = Utc::now();
    let status     = ProceedingStatus::Unverified;

    let client_id   = input.client_id.clone();
    let debtor_name = input.debtor_name.clone();
    let debtor_dob  = input.debtor_dob.clone();
    let ip_number   = input.ip_number.clone();
    let status_str  = encode_status(status);
    let at_str      = encode_dt(created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO debtors (
             client_id, debtor_name, debtor_dob, ip_number, status, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            client_id,
            debtor_name,
            debtor_dob,
            ip_number,
            status_str,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(DebtorRecord {
      id,
      client_id: input.client_id,
      debtor_name: input.debtor_name,
      debtor_dob: input.debtor_dob,
      ip_number: input.ip_number,
      status,
      created_at,
    })
  }

  async fn update_status_by_client_id(
    &self,
    client_id: &str,
    status:    ProceedingStatus,
  ) -> Result<usize> {
    let client_id  = client_id.to_owned();
    let status_str = encode_status(status);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE debtors SET status = ?1 WHERE client_id = ?2",
          rusqlite::params![status_str, client_id],
        )?)
      })
      .await?;

    Ok(changed)
  }

  async fn update_status(&self, id: i64, status: ProceedingStatus) -> Result<bool> {
    let status_str = encode_status(status);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE debtors SET status = ?1 WHERE id = ?2",
          rusqlite::params![status_str, id],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn get(&self, id: i64) -> Result<Option<DebtorRecord>> {
    let raw: Option<RawDebtor> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {DEBTOR_COLUMNS} FROM debtors WHERE id = ?1"),
            rusqlite::params![id],
            RawDebtor::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawDebtor::into_record).transpose()
  }

  async fn list_all(&self) -> Result<Vec<DebtorRecord>> {
    let raws: Vec<RawDebtor> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {DEBTOR_COLUMNS} FROM debtors ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawDebtor::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDebtor::into_record).collect()
  }
}
