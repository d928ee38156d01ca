//! Tunables for the check flow and the background dispatcher.
//!
//! Both structs deserialise from partial input; missing keys take the
//! defaults below.

use std::time::Duration;

use serde::Deserialize;

/// Which rows a check writes its resolved status to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusUpdate {
  /// Every record sharing the request's `client_id`, including older ones.
  #[default]
  ClientId,
  /// Only the record inserted by this check.
  Record,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
  /// Simulated round-trip to the registry.
  pub registry_latency_ms: u64,
  pub status_update:       StatusUpdate,
  /// Recipient of the "debt paid" bot message.
  pub bot_phone:           String,
  /// Amount quoted in the bot message, in roubles.
  pub debt_amount:         u64,
}

impl CheckSettings {
  pub fn registry_latency(&self) -> Duration {
    Duration::from_millis(self.registry_latency_ms)
  }
}

impl Default for CheckSettings {
  fn default() -> Self {
    Self {
      registry_latency_ms: 1500,
      status_update:       StatusUpdate::default(),
      bot_phone:           "+79991234567".to_string(),
      debt_amount:         150_000,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
  pub workers:        usize,
  pub queue_capacity: usize,
}

impl Default for DispatchSettings {
  fn default() -> Self {
    Self { workers: 4, queue_capacity: 1024 }
  }
}
