// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{GatewayError, Result};
use std::fmt;

/// Location of a resource instance, as given by a caller or as resolved
/// by the scope policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCoordinates {
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
}

impl ResourceCoordinates {
    /// Coordinates of a single named instance
    pub fn named(kind: &str, name: &str, namespace: &str) -> Result<Self> {
        require_kind(kind)?;
        if name.is_empty() {
            return Err(GatewayError::InvalidInput("name is required".into()));
        }

        Ok(Self {
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: non_empty(namespace),
        })
    }

    /// Coordinates of all instances of a kind, optionally within a namespace
    pub fn collection(kind: &str, namespace: &str) -> Result<Self> {
        require_kind(kind)?;

        Ok(Self {
            kind: kind.to_string(),
            name: String::new(),
            namespace: non_empty(namespace),
        })
    }

    /// The same location addressed in `namespace`
    pub fn in_namespace(&self, namespace: Option<String>) -> Self {
        Self {
            namespace,
            ..self.clone()
        }
    }
}

fn require_kind(kind: &str) -> Result<()> {
    if kind.is_empty() {
        return Err(GatewayError::InvalidInput("kind is required".into()));
    }
    Ok(())
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

impl fmt::Display for ResourceCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.namespace, self.name.is_empty()) {
            (Some(ns), false) => write!(f, "{} {}/{}", self.kind, ns, self.name),
            (None, false) => write!(f, "{} {}", self.kind, self.name),
            (Some(ns), true) => write!(f, "{} in namespace {}", self.kind, ns),
            (None, true) => write!(f, "{}", self.kind),
        }
    }
}
