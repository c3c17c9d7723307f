// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory stand-in for the API server holding a single CredentialsRequest.
//!
//! `store::CredentialsRequestStore` is the synchronous single-slot store;
//! `kubernetes::FakeApiServer` exposes it to code that talks through `kube::Client`.

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod store;
pub mod template;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{CredReqError, GroupResource, Result, ValidationError};
pub use kubernetes::FakeApiServer;
pub use store::CredentialsRequestStore;
pub use template::{EmbeddedAssets, TemplateProvider};
