// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission checks for candidate CredentialsRequests

use crate::config::Config;
use crate::error::ValidationError;
use crate::types::CredentialsRequest;
use kube::api::DynamicObject;
use kube::Resource;

/// Compares candidates against the expected identity and the template's spec
#[derive(Debug, Clone)]
pub struct Validator {
    kind: String,
    namespace: String,
    name: String,
    spec: Option<serde_json::Value>,
}

impl Validator {
    pub fn new(config: &Config, template: &DynamicObject) -> Self {
        Self {
            kind: CredentialsRequest::kind(&()).into_owned(),
            namespace: config.namespace.clone(),
            name: config.name.clone(),
            spec: template.data.get("spec").cloned(),
        }
    }

    /// Check kind, namespace, name and spec in that order, stopping at the first mismatch
    pub fn validate(&self, candidate: &DynamicObject) -> Result<(), ValidationError> {
        let kind = candidate
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default();
        if kind != self.kind {
            return Err(ValidationError::Kind {
                expected: self.kind.clone(),
                actual: kind.to_string(),
            });
        }

        let namespace = candidate.metadata.namespace.as_deref().unwrap_or_default();
        if namespace != self.namespace {
            return Err(ValidationError::Namespace {
                expected: self.namespace.clone(),
                actual: namespace.to_string(),
            });
        }

        let name = candidate.metadata.name.as_deref().unwrap_or_default();
        if name != self.name {
            return Err(ValidationError::Name {
                expected: self.name.clone(),
                actual: name.to_string(),
            });
        }

        if candidate.data.get("spec") != self.spec.as_ref() {
            return Err(ValidationError::Spec);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_template, make_valid_candidate};
    use kube::core::TypeMeta;

    fn make_validator() -> Validator {
        Validator::new(&Config::default(), &make_template())
    }

    #[test]
    fn test_valid_candidate_passes() {
        assert_eq!(make_validator().validate(&make_valid_candidate()), Ok(()));
    }

    #[test]
    fn test_wrong_kind() {
        let mut candidate = make_valid_candidate();
        candidate.types = Some(TypeMeta {
            api_version: "v1".to_string(),
            kind: "Secret".to_string(),
        });

        let err = make_validator().validate(&candidate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected kind CredentialsRequest, got Secret"
        );
    }

    #[test]
    fn test_missing_kind() {
        let mut candidate = make_valid_candidate();
        candidate.types = None;

        let err = make_validator().validate(&candidate).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Kind {
                expected: "CredentialsRequest".to_string(),
                actual: String::new(),
            }
        );
    }

    #[test]
    fn test_wrong_namespace() {
        let mut candidate = make_valid_candidate();
        candidate.metadata.namespace = Some("default".to_string());

        let err = make_validator().validate(&candidate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected namespace openshift-cluster-csi-drivers, got default"
        );
    }

    #[test]
    fn test_wrong_name_reports_name() {
        let mut candidate = make_valid_candidate();
        candidate.metadata.name = Some("something-else".to_string());

        let err = make_validator().validate(&candidate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected name openshift-aws-ebs-csi-driver, got something-else"
        );
    }

    #[test]
    fn test_namespace_checked_before_name() {
        let mut candidate = make_valid_candidate();
        candidate.metadata.namespace = Some("default".to_string());
        candidate.metadata.name = Some("something-else".to_string());

        let err = make_validator().validate(&candidate).unwrap_err();
        assert!(matches!(err, ValidationError::Namespace { .. }));
    }

    #[test]
    fn test_kind_checked_first() {
        let mut candidate = make_valid_candidate();
        candidate.types = None;
        candidate.metadata.namespace = None;
        candidate.data["spec"] = serde_json::json!({});

        let err = make_validator().validate(&candidate).unwrap_err();
        assert!(matches!(err, ValidationError::Kind { .. }));
    }

    #[test]
    fn test_different_spec() {
        let mut candidate = make_valid_candidate();
        candidate.data["spec"]["secretRef"]["name"] = serde_json::json!("other-secret");

        let err = make_validator().validate(&candidate).unwrap_err();
        assert_eq!(err, ValidationError::Spec);
        assert_eq!(err.to_string(), "expected different spec");
    }

    #[test]
    fn test_missing_spec() {
        let mut candidate = make_valid_candidate();
        if let Some(data) = candidate.data.as_object_mut() {
            data.remove("spec");
        }

        assert_eq!(
            make_validator().validate(&candidate),
            Err(ValidationError::Spec)
        );
    }

    #[test]
    fn test_ignores_metadata_beyond_identity() {
        let mut candidate = make_valid_candidate();
        candidate.metadata.generation = Some(42);
        candidate.metadata.resource_version = Some("abc".to_string());
        candidate.metadata.labels = Some([("a".to_string(), "b".to_string())].into());

        assert_eq!(make_validator().validate(&candidate), Ok(()));
    }
}
