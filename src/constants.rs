// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The single API group this service is allowed to operate on
pub const TENANT_GROUP: &str = "tenant.dev";

/// Version used for coordinate-based operations (get, delete, list)
pub const DEFAULT_VERSION: &str = "v1alpha1";

/// Namespace assigned to namespaced resources that arrive without one
pub const DEFAULT_NAMESPACE: &str = "default";

/// The field manager used for server-side apply
pub const FIELD_MANAGER: &str = "resource-gateway";

/// CustomResourceDefinition annotation keys
pub mod annotations {
    /// Human readable description of a type
    pub const DESCRIPTION: &str = "description";
}

/// Kinds whose instances are cluster-scoped unless configured otherwise
pub const CLUSTER_SCOPED_KINDS: &[&str] = &[
    "Organization",
    "DataPlane",
    "BuildPlane",
    "ComponentTypeDefinition",
    "Addon",
    "ServiceClass",
    "WebApplicationClass",
    "ScheduledTaskClass",
    "APIClass",
    "ConfigurationGroup",
    "ClusterWorkflowTemplate",
    "CustomResourceDefinition",
];

/// Scope policy file format version understood by this build
pub const SCOPE_POLICY_VERSION: u32 = 1;
