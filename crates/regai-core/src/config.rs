//! Advisor configuration.
//!
//! Resolution order, later wins: built-in defaults, `config.json` in the
//! data directory, `REGAI_*` environment variables, command-line flags
//! (applied by the binaries).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{RegaiError, RegaiResult};
use crate::identity::{FirebaseIdentity, MemoryIdentity, SharedIdentity, FIREBASE_AUTH_BASE};
use crate::plan::PlanTrust;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

pub const ENV_ENDPOINT: &str = "REGAI_ENDPOINT";
pub const ENV_FIREBASE_API_KEY: &str = "REGAI_FIREBASE_API_KEY";
pub const ENV_ESCAPE_PLAN: &str = "REGAI_ESCAPE_PLAN";

/// Which identity provider backs sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum IdentityConfig {
    /// In-process accounts, lost on exit
    #[default]
    Memory,
    /// Hosted Firebase accounts
    Firebase {
        api_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        auth_base: Option<String>,
    },
}

impl IdentityConfig {
    /// Backend tag as written in `config.json`.
    pub fn backend(&self) -> &'static str {
        match self {
            IdentityConfig::Memory => "memory",
            IdentityConfig::Firebase { .. } => "firebase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Base URL of the plan endpoint
    pub endpoint: String,
    pub identity: IdentityConfig,
    pub plan_trust: PlanTrust,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            identity: IdentityConfig::default(),
            plan_trust: PlanTrust::default(),
        }
    }
}

impl AdvisorConfig {
    /// Read `config.json` from `data_dir`, or defaults when it does not exist.
    pub fn load(data_dir: impl AsRef<Path>) -> RegaiResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            RegaiError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::info!(?path, "Loaded configuration");
        Ok(config)
    }

    /// `load` followed by the process environment.
    pub fn resolve(data_dir: impl AsRef<Path>) -> RegaiResult<Self> {
        let mut config = Self::load(data_dir)?;
        config.apply_env_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Write `config.json` into `data_dir`, creating it if needed.
    pub fn save(&self, data_dir: impl AsRef<Path>) -> RegaiResult<PathBuf> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(CONFIG_FILE);
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    /// Apply `REGAI_*` overrides read through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(api_key) = lookup(ENV_FIREBASE_API_KEY).filter(|v| !v.is_empty()) {
            let auth_base = match &self.identity {
                IdentityConfig::Firebase { auth_base, .. } => auth_base.clone(),
                IdentityConfig::Memory => None,
            };
            self.identity = IdentityConfig::Firebase { api_key, auth_base };
        }
        if let Some(flag) = lookup(ENV_ESCAPE_PLAN) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "no" | "off" => self.plan_trust = PlanTrust::Verbatim,
                "1" | "true" | "yes" | "on" => self.plan_trust = PlanTrust::Escaped,
                other => tracing::warn!(value = other, "Ignoring unrecognised {}", ENV_ESCAPE_PLAN),
            }
        }
    }

    /// Construct the identity provider this configuration names.
    pub fn build_identity(&self) -> SharedIdentity {
        match &self.identity {
            IdentityConfig::Memory => Arc::new(MemoryIdentity::new()),
            IdentityConfig::Firebase { api_key, auth_base } => Arc::new(FirebaseIdentity::with_base(
                auth_base.as_deref().unwrap_or(FIREBASE_AUTH_BASE),
                api_key.as_str(),
            )),
        }
    }
}

/// Default data directory (`~/.regai`).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".regai")
}

/// Where the JSONL logs of a data directory live.
pub fn logs_dir(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = AdvisorConfig::load(temp.path()).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.plan_trust, PlanTrust::Escaped);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let config = AdvisorConfig {
            endpoint: "http://advisor.local:8080".into(),
            identity: IdentityConfig::Firebase {
                api_key: "key-123".into(),
                auth_base: None,
            },
            plan_trust: PlanTrust::Verbatim,
        };
        let path = config.save(temp.path().join("nested")).unwrap();
        assert!(path.ends_with(CONFIG_FILE));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"backend\": \"firebase\""));
        assert!(written.contains("\"plan_trust\": \"verbatim\""));

        let loaded = AdvisorConfig::load(temp.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            r#"{"endpoint": "http://10.0.0.5:5000"}"#,
        )
        .unwrap();
        let config = AdvisorConfig::load(temp.path()).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.5:5000");
        assert_eq!(config.identity, IdentityConfig::Memory);
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "{endpoint").unwrap();
        assert!(matches!(
            AdvisorConfig::load(temp.path()),
            Err(RegaiError::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AdvisorConfig::default();
        config.apply_env_from(env(&[
            (ENV_ENDPOINT, "http://remote:5000"),
            (ENV_FIREBASE_API_KEY, "abc"),
            (ENV_ESCAPE_PLAN, "false"),
        ]));
        assert_eq!(config.endpoint, "http://remote:5000");
        assert_eq!(
            config.identity,
            IdentityConfig::Firebase {
                api_key: "abc".into(),
                auth_base: None
            }
        );
        assert_eq!(config.plan_trust, PlanTrust::Verbatim);
    }

    #[test]
    fn test_empty_env_ignored() {
        let mut config = AdvisorConfig::default();
        config.apply_env_from(env(&[(ENV_ENDPOINT, ""), (ENV_ESCAPE_PLAN, "maybe")]));
        assert_eq!(config, AdvisorConfig::default());
    }

    #[test]
    fn test_build_identity() {
        assert_eq!(AdvisorConfig::default().build_identity().name(), "memory");
        assert_eq!(AdvisorConfig::default().identity.backend(), "memory");
        let firebase = AdvisorConfig {
            identity: IdentityConfig::Firebase {
                api_key: "k".into(),
                auth_base: Some("http://127.0.0.1:9099".into()),
            },
            ..AdvisorConfig::default()
        };
        assert_eq!(firebase.build_identity().name(), firebase.identity.backend());
    }

    #[test]
    fn test_data_dir_layout() {
        assert!(default_data_dir().ends_with(".regai"));
        assert_eq!(logs_dir("/tmp/regai"), PathBuf::from("/tmp/regai/logs"));
    }
}
