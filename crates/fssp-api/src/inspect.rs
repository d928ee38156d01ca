//! Read-only and test-data endpoints. They go straight to the store and skip
//! the check flow entirely.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Liveness message |
//! | `GET`  | `/add-test-debtor/` | Inserts one fixed `unverified` record |
//! | `GET`  | `/debtors/` | Every record, id order |

use axum::{Json, extract::State};
use fssp_core::{
  debtor::{DebtorRecord, NewDebtor},
  store::DebtorStore,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{AppState, error::InspectError};

/// The record inserted by [`seed`].
pub fn test_debtor() -> NewDebtor {
  NewDebtor {
    client_id:   "test_client_1".to_string(),
    debtor_name: "Ivanov Ivan Ivanovich".to_string(),
    debtor_dob:  "1980-01-01".to_string(),
    ip_number:   Some("12345/20/123456-IP".to_string()),
  }
}

/// `GET /`
pub async fn health() -> Json<Value> {
  Json(json!({ "message": "FSSP tracker is running" }))
}

/// `GET /add-test-debtor/`
pub async fn seed<S>(State(state): State<AppState<S>>) -> Result<Json<Value>, InspectError>
where
  S: DebtorStore + Clone + 'static,
{
  state
    .store
    .insert(test_debtor())
    .await
    .map_err(InspectError::store)?;
  Ok(Json(json!({ "message": "Test record added to the database" })))
}

#[derive(Debug, Serialize)]
pub struct DebtorList {
  pub debtors: Vec<DebtorRecord>,
}

/// `GET /debtors/`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<DebtorList>, InspectError>
where
  S: DebtorStore + Clone + 'static,
{
  let debtors = state.store.list_all().await.map_err(InspectError::store)?;
  Ok(Json(DebtorList { debtors }))
}
