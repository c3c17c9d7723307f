// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Single-slot store emulating the API server for one CredentialsRequest.

use crate::config::Config;
use crate::error::{CredReqError, GroupResource, Result};
use crate::store::validation::Validator;
use crate::template::{load_template, TemplateProvider};
use crate::types::CredentialsRequest;
use kube::api::{
    DeleteParams, DynamicObject, ListParams, ObjectList, PatchParams, WatchEvent, WatchParams,
};
use kube::ResourceExt;

/// Holds at most one CredentialsRequest.
///
/// Every object going in or out is cloned, so callers never share state with the slot.
/// The store does no locking; concurrent callers must serialize access themselves.
#[derive(Debug, Clone)]
pub struct CredentialsRequestStore {
    slot: Option<DynamicObject>,
    validator: Validator,
    group_resource: GroupResource,
}

impl CredentialsRequestStore {
    /// Create an empty store, loading the expected template from `templates`
    pub fn new<P>(config: &Config, templates: &P) -> Result<Self>
    where
        P: TemplateProvider + ?Sized,
    {
        let template = load_template(templates, &config.template_key)?;
        Ok(Self {
            slot: None,
            validator: Validator::new(config, &template),
            group_resource: CredentialsRequest::group_resource(),
        })
    }

    /// Store a new object with generation 1 and resourceVersion "1".
    ///
    /// Validation runs before the occupancy check, so an invalid candidate
    /// against an occupied slot reports the validation error.
    pub fn create(&mut self, candidate: &DynamicObject) -> Result<DynamicObject> {
        self.validator.validate(candidate)?;
        if self.slot.is_some() {
            return Err(self.already_exists(&candidate.name_any()));
        }

        let mut stored = candidate.clone();
        stored.metadata.generation = Some(1);
        stored.metadata.resource_version = Some("1".to_string());
        self.slot = Some(stored.clone());
        Ok(stored)
    }

    /// Replace the stored object, bumping generation and resourceVersion from the candidate
    pub fn update(&mut self, candidate: &DynamicObject) -> Result<DynamicObject> {
        self.validator.validate(candidate)?;
        if self.slot.is_none() {
            return Err(self.not_found(&candidate.name_any()));
        }

        let generation = candidate.metadata.generation.unwrap_or_default();
        let version = parse_resource_version(candidate.metadata.resource_version.as_deref());

        let mut stored = candidate.clone();
        stored.metadata.generation = Some(generation.saturating_add(1));
        stored.metadata.resource_version = Some(version.saturating_add(1).to_string());
        self.slot = Some(stored.clone());
        Ok(stored)
    }

    pub fn get(&self, name: &str) -> Result<DynamicObject> {
        match &self.slot {
            Some(stored) if stored.metadata.name.as_deref() == Some(name) => Ok(stored.clone()),
            _ => Err(self.not_found(name)),
        }
    }

    /// Empty the slot. The requested name is not compared with the stored one.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.slot.take() {
            Some(_) => Ok(()),
            None => Err(self.not_found(name)),
        }
    }

    pub fn update_status(&mut self, _candidate: &DynamicObject) -> Result<DynamicObject> {
        Err(CredReqError::Unimplemented {
            operation: "update_status",
        })
    }

    pub fn list(&self, _params: &ListParams) -> Result<ObjectList<DynamicObject>> {
        Err(CredReqError::Unimplemented { operation: "list" })
    }

    pub fn watch(
        &self,
        _params: &WatchParams,
        _version: &str,
    ) -> Result<Vec<WatchEvent<DynamicObject>>> {
        Err(CredReqError::Unimplemented { operation: "watch" })
    }

    pub fn patch(
        &mut self,
        _name: &str,
        _params: &PatchParams,
        _data: &[u8],
    ) -> Result<DynamicObject> {
        Err(CredReqError::Unimplemented { operation: "patch" })
    }

    pub fn delete_collection(&mut self, _params: &DeleteParams, _list: &ListParams) -> Result<()> {
        Err(CredReqError::Unimplemented {
            operation: "delete_collection",
        })
    }

    fn not_found(&self, name: &str) -> CredReqError {
        CredReqError::NotFound {
            group_resource: self.group_resource.clone(),
            name: name.to_string(),
        }
    }

    fn already_exists(&self, name: &str) -> CredReqError {
        CredReqError::AlreadyExists {
            group_resource: self.group_resource.clone(),
            name: name.to_string(),
        }
    }
}

/// Integer value of a resourceVersion; missing or non-numeric counts as 0
fn parse_resource_version(version: Option<&str>) -> i64 {
    version.and_then(|v| v.parse().ok()).unwrap_or(0)
}
