// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client-side helpers for CredentialsRequests

use crate::constants::reasons;
use crate::types::CredentialsRequest;
use kube::api::DynamicObject;
use kube::{Api, Client};

/// Untyped Api for CredentialsRequests in `namespace`
pub fn credentials_request_api(client: Client, namespace: &str) -> Api<DynamicObject> {
    Api::namespaced_with(client, namespace, &CredentialsRequest::api_resource())
}

/// Check if the API server answered with a NotFound status
pub fn is_not_found(err: &kube::Error) -> bool {
    has_reason(err, reasons::NOT_FOUND)
}

/// Check if the API server answered with an AlreadyExists status
pub fn is_already_exists(err: &kube::Error) -> bool {
    has_reason(err, reasons::ALREADY_EXISTS)
}

fn has_reason(err: &kube::Error, reason: &str) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.reason == reason)
}
