// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::reasons;
use std::fmt;
use thiserror::Error;

/// API group and resource plural an error refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResource {
    pub group: String,
    pub resource: String,
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Reasons a candidate CredentialsRequest is rejected, checked in declaration order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected kind {expected}, got {actual}")]
    Kind { expected: String, actual: String },

    #[error("expected namespace {expected}, got {actual}")]
    Namespace { expected: String, actual: String },

    #[error("expected name {expected}, got {actual}")]
    Name { expected: String, actual: String },

    #[error("expected different spec")]
    Spec,
}

#[derive(Error, Debug)]
pub enum CredReqError {
    #[error("{group_resource} \"{name}\" not found")]
    NotFound {
        group_resource: GroupResource,
        name: String,
    },

    #[error("{group_resource} \"{name}\" already exists")]
    AlreadyExists {
        group_resource: GroupResource,
        name: String,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("not implemented")]
    Unimplemented { operation: &'static str },

    #[error("Failed to load template {key}: {reason}")]
    Template { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CredReqError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CredReqError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, CredReqError::AlreadyExists { .. })
    }

    /// HTTP status code a Kubernetes API server would answer with
    pub fn code(&self) -> u16 {
        match self {
            CredReqError::NotFound { .. } => 404,
            CredReqError::AlreadyExists { .. } => 409,
            CredReqError::Invalid(_) => 422,
            CredReqError::Unimplemented { .. } => 405,
            CredReqError::Template { .. } | CredReqError::Serialization(_) => 500,
        }
    }

    /// Machine-readable `Status` reason matching `code`
    pub fn reason(&self) -> &'static str {
        match self {
            CredReqError::NotFound { .. } => reasons::NOT_FOUND,
            CredReqError::AlreadyExists { .. } => reasons::ALREADY_EXISTS,
            CredReqError::Invalid(_) => reasons::INVALID,
            CredReqError::Unimplemented { .. } => reasons::METHOD_NOT_ALLOWED,
            CredReqError::Template { .. } | CredReqError::Serialization(_) => {
                reasons::INTERNAL_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CredReqError>;
