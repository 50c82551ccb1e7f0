//! Server configuration, deserialised from an optional TOML file layered
//! under `SKINRANK_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use skinrank_core::suggest::SuggestionPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_store_path")]
  pub store_path:    PathBuf,
  /// Candidates carried from the ingredient ranking into the review lookup.
  #[serde(default = "default_candidate_cap")]
  pub candidate_cap: usize,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("skinrank.db") }
fn default_candidate_cap() -> usize { SuggestionPolicy::default().candidate_cap }

impl ServerConfig {
  /// Read `path` (if it exists) and overlay `SKINRANK_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("SKINRANK"))
      .build()
      .context("failed to read config file")?;

    let cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;
    cfg.validate()?;
    Ok(cfg)
  }

  fn validate(&self) -> anyhow::Result<()> {
    anyhow::ensure!(
      self.candidate_cap >= 1,
      "candidate_cap must be at least 1, got {}",
      self.candidate_cap
    );
    Ok(())
  }

  pub fn policy(&self) -> SuggestionPolicy {
    SuggestionPolicy { candidate_cap: self.candidate_cap, ..SuggestionPolicy::default() }
  }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
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

  fn from_toml(raw: &str) -> ServerConfig {
    config::Config::builder()
      .add_source(config::File::from_str(raw, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_file_uses_defaults() {
    let cfg = from_toml("");
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("skinrank.db"));
    assert_eq!(cfg.policy(), SuggestionPolicy::default());
  }

  #[test]
  fn candidate_cap_flows_into_policy() {
    let cfg = from_toml("port = 9000\ncandidate_cap = 5\n");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.policy().candidate_cap, 5);
    assert_eq!(cfg.policy().max_reviews_per_product, 2);
  }

  #[test]
  fn zero_candidate_cap_is_rejected() {
    let err = from_toml("candidate_cap = 0").validate().unwrap_err();
    assert!(err.to_string().contains("candidate_cap"), "{err}");
    assert!(from_toml("candidate_cap = 1").validate().is_ok());
  }

  #[test]
  fn load_rejects_zero_candidate_cap() {
    let path = std::env::temp_dir().join(format!("skinrank-zero-cap-{}.toml", std::process::id()));
    std::fs::write(&path, "candidate_cap = 0\n").unwrap();
    let result = ServerConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
  }

  #[test]
  fn tilde_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    let cfg = from_toml("store_path = \"~/data/skinrank.db\"");
    assert_eq!(cfg.resolved_store_path(), PathBuf::from(home).join("data/skinrank.db"));
  }
}
