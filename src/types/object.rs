// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Caller supplied resource documents.

use crate::error::{GatewayError, Result};
use kube::core::{DynamicObject, TypeMeta};
use kube::ResourceExt;
use serde_json::Value;

/// A single resource instance of an arbitrary type.
///
/// `apiVersion`, `kind` and `metadata.name` are guaranteed to be present
/// and non-empty; `spec`, `status` and any other top-level keys are kept
/// as an open document.
#[derive(Debug, Clone)]
pub struct GenericObject {
    inner: DynamicObject,
}

impl GenericObject {
    /// Parse a raw JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GatewayError::InvalidInput(format!("failed to parse resource: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(GatewayError::InvalidInput(
                "resource must be a JSON object".into(),
            ));
        }

        let kind = required_str(&value, "kind")?.to_string();
        let api_version = required_str(&value, "apiVersion")?.to_string();

        let Some(metadata) = value.get("metadata").filter(|m| m.is_object()) else {
            return Err(GatewayError::InvalidInput(
                "missing or invalid 'metadata' field".into(),
            ));
        };
        if required_str(metadata, "name").is_err() {
            return Err(GatewayError::InvalidInput(
                "missing or invalid 'metadata.name' field".into(),
            ));
        }

        let mut inner: DynamicObject = serde_json::from_value(value)
            .map_err(|e| GatewayError::InvalidInput(format!("invalid resource: {}", e)))?;
        inner.types = Some(TypeMeta { api_version, kind });

        Ok(Self { inner })
    }

    pub fn api_version(&self) -> &str {
        self.inner
            .types
            .as_ref()
            .map(|t| t.api_version.as_str())
            .unwrap_or_default()
    }

    pub fn kind(&self) -> &str {
        self.inner
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.inner.name_any()
    }

    /// Namespace, if one is set and non-empty
    pub fn namespace(&self) -> Option<&str> {
        self.inner
            .metadata
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.inner.metadata.namespace = namespace;
    }

    pub fn as_dynamic(&self) -> &DynamicObject {
        &self.inner
    }
}

fn required_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GatewayError::InvalidInput(format!("missing or invalid '{}' field", field)))
}
