// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed Kubernetes resources handled by the store.

pub mod credentials_request;

pub use credentials_request::{CredentialsRequest, CredentialsRequestSpec, SecretReference};
