// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Static classification of kinds into cluster-scoped and namespaced.

use crate::config::Config;
use crate::types::{GenericObject, ResourceCoordinates, ScopeDrift, TypeDescriptor, TypeSummary};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Decides which namespace, if any, an instance of a kind lives in.
///
/// The table is configuration and is not checked against the cluster on
/// each request. A cluster-scoped kind missing from the table is treated
/// as namespaced; [`ScopePolicy::check_drift`] detects that case.
#[derive(Debug, Clone)]
pub struct ScopePolicy {
    cluster_scoped: BTreeSet<String>,
    default_namespace: String,
}

impl ScopePolicy {
    pub fn new(cluster_scoped: BTreeSet<String>, default_namespace: impl Into<String>) -> Self {
        Self {
            cluster_scoped,
            default_namespace: default_namespace.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cluster_scoped_kinds.clone(),
            config.default_namespace.clone(),
        )
    }

    pub fn is_cluster_scoped(&self, kind: &str) -> bool {
        self.cluster_scoped.contains(kind)
    }

    /// Fix up the namespace of an object about to be written.
    pub fn apply_scope(&self, obj: &mut GenericObject, descriptor: &TypeDescriptor) {
        if self.is_cluster_scoped(&descriptor.kind) {
            if let Some(namespace) = obj.namespace() {
                warn!(
                    "Removing namespace '{}' from cluster-scoped {} '{}'",
                    namespace,
                    descriptor.kind,
                    obj.name()
                );
            }
            obj.set_namespace(None);
            return;
        }

        if obj.namespace().is_none() {
            info!(
                "Applying default namespace '{}' to {} '{}'",
                self.default_namespace,
                descriptor.kind,
                obj.name()
            );
            obj.set_namespace(Some(self.default_namespace.clone()));
        }
    }

    /// Namespace to address a single named instance with.
    /// `None` for cluster-scoped kinds.
    pub fn namespace_for(&self, coordinates: &ResourceCoordinates) -> Option<String> {
        if self.is_cluster_scoped(&coordinates.kind) {
            return None;
        }
        Some(
            coordinates
                .namespace
                .clone()
                .unwrap_or_else(|| self.default_namespace.clone()),
        )
    }

    /// Namespace to list in. `None` means all namespaces, or a cluster-scoped kind.
    pub fn list_namespace_for(&self, coordinates: &ResourceCoordinates) -> Option<String> {
        if self.is_cluster_scoped(&coordinates.kind) {
            return None;
        }
        coordinates.namespace.clone()
    }

    /// Compare the table against the scopes the catalog declares.
    pub fn check_drift(&self, types: &[TypeSummary]) -> Vec<ScopeDrift> {
        types
            .iter()
            .filter_map(|t| {
                let configured_namespaced = !self.is_cluster_scoped(&t.kind);
                (configured_namespaced != t.namespaced).then(|| ScopeDrift {
                    kind: t.kind.clone(),
                    configured_namespaced,
                    live_namespaced: t.namespaced,
                })
            })
            .collect()
    }
}
