//! Handler for `POST /check-status/`.
//!
//! Records the request, asks the registry, stores the answer and queues the
//! CRM and bot notifications. Steps run strictly in that order and nothing is
//! rolled back: if the status update fails the inserted row stays
//! `unverified`.
//!
//! Notifications ride along with the response body and reach the dispatcher
//! only once the body has been written out (or abandoned).

use std::{
  convert::Infallible,
  pin::Pin,
  task::{Context, Poll},
};

use axum::{
  Json,
  body::Body,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use fssp_core::{
  debtor::{DebtorRecord, NewDebtor},
  status::ProceedingStatus,
  store::DebtorStore,
};
use serde::{Deserialize, Serialize};
use tokio_stream::Stream;
use tracing::info;

use crate::{AppState, dispatch::Deferred, error::CheckError, settings::StatusUpdate};

/// JSON body accepted by `POST /check-status/`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
  pub debtor_name: String,
  /// Free-form, e.g. `"1980-01-01"`.
  pub debtor_dob:  String,
  #[serde(default)]
  pub ip_number:   Option<String>,
  /// Correlation id from the CRM.
  pub client_id:   String,
}

impl From<CheckRequest> for NewDebtor {
  fn from(b: CheckRequest) -> Self {
    NewDebtor {
      client_id:   b.client_id,
      debtor_name: b.debtor_name,
      debtor_dob:  b.debtor_dob,
      ip_number:   b.ip_number,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
  /// Always `"success"`; failures are reported through [`CheckError`].
  pub status:      &'static str,
  pub message:     String,
  pub debtor_name: String,
  pub ip_number:   Option<String>,
}

/// `POST /check-status/`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<CheckRequest>,
) -> Result<Response, CheckError>
where
  S: DebtorStore + Clone + 'static,
{
  info!(debtor = %body.debtor_name, client_id = %body.client_id, "check requested");

  let record = state
    .store
    .insert(NewDebtor::from(body))
    .await
    .map_err(CheckError::store)?;

  let status = state
    .integrations
    .registry
    .check(record.ip_number.as_deref())
    .await?;

  match state.settings.status_update {
    StatusUpdate::ClientId => {
      state
        .store
        .update_status_by_client_id(&record.client_id, status)
        .await
        .map_err(CheckError::store)?;
    }
    StatusUpdate::Record => {
      state
        .store
        .update_status(record.id, status)
        .await
        .map_err(CheckError::store)?;
    }
  }

  let deferred = schedule_notifications(&state, &record, status);

  let result = CheckResult {
    status:      "success",
    message:     format!("Check completed. Status: {status}"),
    debtor_name: record.debtor_name,
    ip_number:   record.ip_number,
  };
  let json = serde_json::to_vec(&result)?;

  Ok(
    (
      [(header::CONTENT_TYPE, "application/json")],
      Body::from_stream(BodyThenJobs { chunk: Some(json), _jobs: deferred }),
    )
      .into_response(),
  )
}

fn schedule_notifications<S>(
  state:  &AppState<S>,
  record: &DebtorRecord,
  status: ProceedingStatus,
) -> Deferred
where
  S: DebtorStore,
{
  let mut deferred = Deferred::new(state.dispatcher.clone());

  let crm       = state.integrations.crm.clone();
  let client_id = record.client_id.clone();
  deferred.push("crm-notify", async move {
    crm.notify(&client_id, status).await
  });

  if status == ProceedingStatus::Completed {
    let bot     = state.integrations.bot.clone();
    let phone   = state.settings.bot_phone.clone();
    let message = paid_message(
      record.ip_number.as_deref().unwrap_or_default(),
      state.settings.debt_amount,
    );
    deferred.push("bot-notify", async move {
      bot.send(&phone, &message).await
    });
  }

  deferred
}

/// A single-chunk body that owns the pending notifications. They are
/// submitted when hyper drops the body after the last frame.
struct BodyThenJobs {
  chunk: Option<Vec<u8>>,
  _jobs: Deferred,
}

impl Stream for BodyThenJobs {
  type Item = Result<Vec<u8>, Infallible>;

  fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    Poll::Ready(self.chunk.take().map(Ok))
  }
}

/// Text of the bot message sent when a proceeding is completed.
pub fn paid_message(ip_number: &str, debt_amount: u64) -> String {
  format!(
    "Debt under enforcement proceeding {ip_number} has been paid. Amount: {debt_amount} RUB."
  )
}
