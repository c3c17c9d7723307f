// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes-facing surface: a fake API server over the store and client helpers.

pub mod api;
pub mod server;

pub use api::{credentials_request_api, is_already_exists, is_not_found};
pub use server::FakeApiServer;
