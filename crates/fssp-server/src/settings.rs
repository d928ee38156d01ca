//! Server configuration file and environment handling.
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `FSSP__*` environment variables (`__` separates nested keys, e.g.
//! `FSSP__CHECK__STATUS_UPDATE=record`).

use std::path::{Path, PathBuf};

use fssp_api::{CheckSettings, DispatchSettings};
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; created on first start.
  pub store_path: PathBuf,
  pub check:      CheckSettings,
  pub dispatch:   DispatchSettings,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8000,
      store_path: PathBuf::from("fsps.db"),
      check:      CheckSettings::default(),
      dispatch:   DispatchSettings::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("FSSP")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  use fssp_api::StatusUpdate;

  fn from_toml(toml: &str) -> ServerConfig {
    config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_file_gives_defaults() {
    let cfg = from_toml("");
    assert_eq!(cfg.address(), "127.0.0.1:8000");
    assert_eq!(cfg.store_path, PathBuf::from("fsps.db"));
    assert_eq!(cfg.check.status_update, StatusUpdate::ClientId);
    assert_eq!(cfg.check.registry_latency_ms, 1500);
    assert_eq!(cfg.dispatch.workers, 4);
    assert_eq!(cfg.dispatch.queue_capacity, 1024);
  }

  #[test]
  fn file_overrides_nested_keys() {
    let cfg = from_toml(
      r#"
        port = 9000
        store_path = "/var/lib/fssp/debtors.db"

        [check]
        status_update = "record"
        registry_latency_ms = 10

        [dispatch]
        workers = 1
      "#,
    );
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/fssp/debtors.db"));
    assert_eq!(cfg.check.status_update, StatusUpdate::Record);
    assert_eq!(cfg.check.registry_latency_ms, 10);
    assert_eq!(cfg.check.bot_phone, "+79991234567");
    assert_eq!(cfg.dispatch.workers, 1);
    assert_eq!(cfg.dispatch.queue_capacity, 1024);
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/fssp.toml")).unwrap();
    assert_eq!(cfg.dispatch.queue_capacity, 1024);
  }

  #[test]
  fn tilde_is_left_alone_without_prefix() {
    assert_eq!(expand_tilde(Path::new("data/fsps.db")), PathBuf::from("data/fsps.db"));
  }
}
