//! The `DebtorStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `fssp-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  debtor::{DebtorRecord, NewDebtor},
  status::ProceedingStatus,
};

/// Abstraction over a debtor-record store.
///
/// Every method is a single statement against the backend; no transaction
/// spans more than one call. Records are never deleted.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DebtorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record with status [`ProceedingStatus::Unverified`] and
  /// return it with its generated id.
  fn insert(
    &self,
    input: NewDebtor,
  ) -> impl Future<Output = Result<DebtorRecord, Self::Error>> + Send + '_;

  /// Set `status` on every record whose `client_id` matches. Returns the
  /// number of rows changed, which may be zero or more than one.
  fn update_status_by_client_id<'a>(
    &'a self,
    client_id: &'a str,
    status: ProceedingStatus,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  /// Set `status` on the record with the given id. Returns `false` if no such
  /// record exists.
  fn update_status(
    &self,
    id: i64,
    status: ProceedingStatus,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<DebtorRecord>, Self::Error>> + Send + '_;

  /// Every record, ordered by id ascending.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<DebtorRecord>, Self::Error>> + Send + '_;
}
