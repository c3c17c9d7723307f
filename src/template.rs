// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Expected resource templates, looked up by asset key and decoded from YAML.

use crate::constants::assets;
use crate::error::{CredReqError, Result};
use kube::api::DynamicObject;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Source of raw manifest assets
pub trait TemplateProvider {
    /// Raw bytes stored under `key`, if any
    fn asset(&self, key: &str) -> Option<Cow<'_, [u8]>>;
}

/// Manifests compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

const EMBEDDED: &[(&str, &[u8])] = &[(
    assets::CREDENTIALS_REQUEST,
    include_bytes!("../assets/credentials.yaml"),
)];

impl TemplateProvider for EmbeddedAssets {
    fn asset(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        EMBEDDED
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
    }
}

impl TemplateProvider for HashMap<String, Vec<u8>> {
    fn asset(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        self.get(key).map(|bytes| Cow::Borrowed(bytes.as_slice()))
    }
}

/// Look up `key` and decode it into the expected resource
#[instrument(skip(provider))]
pub fn load_template<P>(provider: &P, key: &str) -> Result<DynamicObject>
where
    P: TemplateProvider + ?Sized,
{
    let bytes = provider.asset(key).ok_or_else(|| CredReqError::Template {
        key: key.to_string(),
        reason: "asset not found".to_string(),
    })?;

    let template = decode_resource(&bytes).map_err(|e| CredReqError::Template {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    debug!("Loaded template {} ({} bytes)", key, bytes.len());
    Ok(template)
}

fn decode_resource(bytes: &[u8]) -> std::result::Result<DynamicObject, serde_yaml::Error> {
    serde_yaml::from_slice(bytes)
}
