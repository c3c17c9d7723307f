// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{GroupResource, Result};
use kube::api::{ApiResource, DynamicObject};
use kube::{CustomResource, Resource};
use serde::{Deserialize, Serialize};

#[derive(
    CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema,
)]
#[kube(
    group = "cloudcredential.openshift.io",
    version = "v1",
    kind = "CredentialsRequest"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequestSpec {
    pub secret_ref: SecretReference,
    /// Cloud specific permissions, kept opaque
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_spec: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_names: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct SecretReference {
    pub name: String,
    pub namespace: String,
}

impl CredentialsRequest {
    /// Build a namespaced CredentialsRequest
    pub fn namespaced(namespace: &str, name: &str, spec: CredentialsRequestSpec) -> Self {
        let mut request = CredentialsRequest::new(name, spec);
        request.metadata.namespace = Some(namespace.to_string());
        request
    }

    /// Group and plural used to tag NotFound / AlreadyExists errors
    pub fn group_resource() -> GroupResource {
        GroupResource {
            group: Self::group(&()).into_owned(),
            resource: Self::plural(&()).into_owned(),
        }
    }

    /// ApiResource for talking to CredentialsRequests through `Api<DynamicObject>`
    pub fn api_resource() -> ApiResource {
        ApiResource::erase::<Self>(&())
    }

    /// Convert to the untyped representation the store operates on
    pub fn to_dynamic(&self) -> Result<DynamicObject> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}
