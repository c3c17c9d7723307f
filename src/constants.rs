// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Expected identity of the single CredentialsRequest held by the store
pub mod identity {
    /// Namespace the operand's CredentialsRequest lives in
    pub const NAMESPACE: &str = "openshift-cluster-csi-drivers";
    /// Name of the operand's CredentialsRequest
    pub const NAME: &str = "openshift-aws-ebs-csi-driver";
}

/// Template asset keys
pub mod assets {
    /// Asset holding the expected CredentialsRequest manifest
    pub const CREDENTIALS_REQUEST: &str = "credentials.yaml";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const NAMESPACE: &str = "CREDENTIALS_REQUEST_NAMESPACE";
    pub const NAME: &str = "CREDENTIALS_REQUEST_NAME";
    pub const ASSET: &str = "CREDENTIALS_REQUEST_ASSET";
}

/// Kubernetes `Status` reasons returned by the fake API server
pub mod reasons {
    pub const NOT_FOUND: &str = "NotFound";
    pub const ALREADY_EXISTS: &str = "AlreadyExists";
    pub const INVALID: &str = "Invalid";
    pub const METHOD_NOT_ALLOWED: &str = "MethodNotAllowed";
    pub const BAD_REQUEST: &str = "BadRequest";
    pub const INTERNAL_ERROR: &str = "InternalError";
}
