//! JSON HTTP API for the FSSP tracker.
//!
//! Exposes an axum [`Router`] backed by any [`fssp_core::store::DebtorStore`].
//! Transport and configuration loading are the caller's responsibility.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/check-status/` | [`check::submit`] |
//! | `GET`  | `/add-test-debtor/` | [`inspect::seed`] |
//! | `GET`  | `/debtors/` | [`inspect::list`] |
//! | `GET`  | `/` | [`inspect::health`] |

pub mod check;
pub mod dispatch;
pub mod error;
pub mod inspect;
pub mod services;
pub mod settings;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use fssp_core::store::DebtorStore;
use tower_http::trace::TraceLayer;

pub use dispatch::Dispatcher;
pub use error::{CheckError, InspectError};
pub use services::Integrations;
pub use settings::{CheckSettings, DispatchSettings, StatusUpdate};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: DebtorStore> {
  pub store:        Arc<S>,
  pub integrations: Integrations,
  pub dispatcher:   Dispatcher,
  pub settings:     Arc<CheckSettings>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the tracker's axum [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: DebtorStore + Clone + 'static,
{
  Router::new()
    .route("/", get(inspect::health))
    .route("/check-status/", post(check::submit::<S>))
    .route("/add-test-debtor/", get(inspect::seed::<S>))
    .route("/debtors/", get(inspect::list::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
