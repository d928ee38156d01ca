//! Stand-ins for the FSSP registry, the CRM and the bot platform.
//!
//! None of them leave the process: the registry sleeps and classifies the
//! identifier, the notifiers only log.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use fssp_core::{
  Result,
  services::{BotNotifier, CrmNotifier, RegistryChecker},
  status::ProceedingStatus,
};
use tracing::info;

/// The external systems a check talks to.
#[derive(Clone)]
pub struct Integrations {
  pub registry: Arc<dyn RegistryChecker>,
  pub crm:      Arc<dyn CrmNotifier>,
  pub bot:      Arc<dyn BotNotifier>,
}

impl Integrations {
  /// All three stubs, with the registry answering after `latency`.
  pub fn stub(latency: Duration) -> Self {
    Self {
      registry: Arc::new(StubRegistry::new(latency)),
      crm:      Arc::new(StubCrm),
      bot:      Arc::new(StubBot),
    }
  }
}

// ─── Registry ─────────────────────────────────────────────────────────────────

/// Answers with [`ProceedingStatus::classify`] after a fixed delay.
#[derive(Debug, Clone)]
pub struct StubRegistry {
  latency: Duration,
}

impl StubRegistry {
  pub fn new(latency: Duration) -> Self { Self { latency } }
}

#[async_trait]
impl RegistryChecker for StubRegistry {
  async fn check(&self, ip_number: Option<&str>) -> Result<ProceedingStatus> {
    info!(ip_number = ip_number.unwrap_or("-"), "simulating FSSP registry lookup");
    tokio::time::sleep(self.latency).await;
    Ok(ProceedingStatus::classify(ip_number))
  }
}

// ─── Notifiers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct StubCrm;

#[async_trait]
impl CrmNotifier for StubCrm {
  async fn notify(&self, client_id: &str, status: ProceedingStatus) -> Result<()> {
    info!(client_id, %status, "simulating CRM status update");
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StubBot;

#[async_trait]
impl BotNotifier for StubBot {
  async fn send(&self, phone: &str, message: &str) -> Result<()> {
    info!(phone, message, "simulating bot message");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::time::Instant;

  #[tokio::test]
  async fn registry_waits_then_classifies() {
    let registry = StubRegistry::new(Duration::from_millis(50));

    let started = Instant::now();
    let status  = registry.check(Some("77-123")).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(status, ProceedingStatus::Completed);
  }

  #[tokio::test]
  async fn registry_without_identifier_is_not_found() {
    let registry = StubRegistry::new(Duration::ZERO);
    assert_eq!(registry.check(None).await.unwrap(), ProceedingStatus::NotFound);
  }

  #[tokio::test]
  async fn notifiers_succeed() {
    let stubs = Integrations::stub(Duration::ZERO);
    stubs.crm.notify("c-1", ProceedingStatus::InProgress).await.unwrap();
    stubs.bot.send("+70000000000", "hello").await.unwrap();
  }
}
