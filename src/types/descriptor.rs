// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of `(apiVersion, kind)` pairs into type descriptors.

use crate::error::{GatewayError, Result};
use kube::core::{ApiResource, GroupVersionKind};
use std::fmt;

/// Fully qualified `(group, version, kind)` of a resource type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl TypeDescriptor {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Parse an `apiVersion` and `kind` and check the group is the tenant group.
    pub fn resolve(api_version: &str, kind: &str, tenant_group: &str) -> Result<Self> {
        let descriptor = Self::parse(api_version, kind)?;

        if tenant_group.is_empty() || descriptor.group != tenant_group {
            return Err(GatewayError::Forbidden(format!(
                "only resources with '{}' group are supported, got '{}'",
                tenant_group, descriptor.group
            )));
        }

        Ok(descriptor)
    }

    /// Parse an `apiVersion` (`group/version`, or a bare `version` for the core group)
    pub fn parse(api_version: &str, kind: &str) -> Result<Self> {
        if kind.is_empty() {
            return Err(GatewayError::InvalidInput("missing or invalid 'kind' field".into()));
        }
        if api_version.is_empty() {
            return Err(GatewayError::InvalidInput(
                "missing or invalid 'apiVersion' field".into(),
            ));
        }

        let (group, version) = match api_version.split_once('/') {
            None => ("", api_version),
            Some((group, version)) => (group, version),
        };

        if version.is_empty() || version.contains('/') || (api_version.contains('/') && group.is_empty())
        {
            return Err(GatewayError::InvalidInput(format!(
                "invalid apiVersion format '{}'",
                api_version
            )));
        }

        Ok(Self::new(group, version, kind))
    }

    /// The `apiVersion` string for this descriptor
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, &self.kind)
    }

    /// API resource used to address instances of this type.
    /// The plural is derived from the kind.
    pub fn api_resource(&self) -> ApiResource {
        ApiResource::from_gvk(&self.gvk())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}
