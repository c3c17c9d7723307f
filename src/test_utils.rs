// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixtures shared by the unit tests.

use crate::config::Config;
use crate::store::CredentialsRequestStore;
use crate::template::{load_template, EmbeddedAssets};
use crate::types::CredentialsRequest;
use kube::api::DynamicObject;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber writing to the test output, once per process
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The bundled CredentialsRequest manifest
pub fn make_template() -> DynamicObject {
    load_template(&EmbeddedAssets, &Config::default().template_key).unwrap()
}

/// A candidate that passes validation with the default configuration
pub fn make_valid_candidate() -> DynamicObject {
    let config = Config::default();
    let mut candidate = make_template();
    candidate.metadata.namespace = Some(config.namespace);
    candidate.metadata.name = Some(config.name);
    candidate.metadata.generation = None;
    candidate.metadata.resource_version = None;
    candidate
}

/// Typed form of `make_valid_candidate`
pub fn make_valid_request() -> CredentialsRequest {
    let value = serde_json::to_value(make_valid_candidate()).unwrap();
    serde_json::from_value(value).unwrap()
}

/// An empty store using the default configuration and bundled template
pub fn make_store() -> CredentialsRequestStore {
    CredentialsRequestStore::new(&Config::default(), &EmbeddedAssets).unwrap()
}
