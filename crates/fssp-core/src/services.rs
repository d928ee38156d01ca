//! Capabilities for the external systems the tracker talks to.
//!
//! These are object-safe so the HTTP layer can hold them as
//! `Arc<dyn RegistryChecker>` etc. and swap a stub for a real client without
//! touching the handlers.

use async_trait::async_trait;

use crate::{Result, status::ProceedingStatus};

/// Looks up an enforcement proceeding in the FSSP registry.
#[async_trait]
pub trait RegistryChecker: Send + Sync {
  async fn check(&self, ip_number: Option<&str>) -> Result<ProceedingStatus>;
}

/// Pushes a status change to the CRM.
#[async_trait]
pub trait CrmNotifier: Send + Sync {
  async fn notify(&self, client_id: &str, status: ProceedingStatus) -> Result<()>;
}

/// Sends a message to a debtor through the bot platform.
#[async_trait]
pub trait BotNotifier: Send + Sync {
  async fn send(&self, phone: &str, message: &str) -> Result<()>;
}
