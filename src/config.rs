// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{assets, env as keys, identity};
use anyhow::{bail, Result};
use std::env;
use tracing::debug;

/// Store configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace every admitted CredentialsRequest must carry
    pub namespace: String,
    /// Name every admitted CredentialsRequest must carry
    pub name: String,
    /// Asset key of the expected CredentialsRequest template
    pub template_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: identity::NAMESPACE.to_string(),
            name: identity::NAME.to_string(),
            template_key: assets::CREDENTIALS_REQUEST.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Config {
            namespace: read_var(&lookup, keys::NAMESPACE, defaults.namespace)?,
            name: read_var(&lookup, keys::NAME, defaults.name)?,
            template_key: read_var(&lookup, keys::ASSET, defaults.template_key)?,
        };

        debug!(
            "Configuration loaded: namespace={}, name={}, template_key={}",
            config.namespace, config.name, config.template_key
        );
        Ok(config)
    }
}

fn read_var<F>(lookup: &F, key: &str, default: String) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => {
            bail!("{} environment variable is set but empty", key)
        }
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.namespace, identity::NAMESPACE);
        assert_eq!(config.name, identity::NAME);
        assert_eq!(config.template_key, assets::CREDENTIALS_REQUEST);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (keys::NAMESPACE, "other-ns"),
            (keys::NAME, "other-name"),
        ]))
        .unwrap();

        assert_eq!(config.namespace, "other-ns");
        assert_eq!(config.name, "other-name");
        assert_eq!(config.template_key, assets::CREDENTIALS_REQUEST);
    }

    #[test]
    fn test_from_env() {
        assert!(Config::from_env().is_ok());
    }

    #[test]
    fn test_from_lookup_rejects_blank_value() {
        let err = Config::from_lookup(lookup_from(&[(keys::ASSET, "  ")])).unwrap_err();
        assert!(err.to_string().contains(keys::ASSET));
    }
}
