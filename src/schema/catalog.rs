// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read access to the CustomResourceDefinition catalog of the tenant group.

use crate::constants::annotations;
use crate::error::{GatewayError, Result};
use crate::schema::flatten::flatten;
use crate::scope::ScopePolicy;
use crate::types::{ScopeDrift, TypeDetail, TypeSummary};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionVersion,
};
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument, warn};

const NAMESPACE_SCOPED: &str = "Namespaced";

/// Lists and describes the custom types of the tenant group.
/// Nothing is cached; every call reads the current catalog.
#[derive(Clone)]
pub struct SchemaService {
    client: Client,
    tenant_group: String,
}

impl SchemaService {
    pub fn new(client: Client, tenant_group: impl Into<String>) -> Self {
        Self {
            client,
            tenant_group: tenant_group.into(),
        }
    }

    /// All tenant types at their storage version, sorted by kind
    #[instrument(skip(self))]
    pub async fn list_types(&self) -> Result<Vec<TypeSummary>> {
        let crds: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let crd_list = crds
            .list(&ListParams::default())
            .await
            .map_err(|e| GatewayError::from_kube(e, "CustomResourceDefinitions"))?;

        info!("Found {} CRDs in cluster", crd_list.items.len());

        let mut types: Vec<TypeSummary> = crd_list
            .items
            .iter()
            .filter(|crd| crd.spec.group == self.tenant_group)
            .map(summarize)
            .collect();

        types.sort_by(|a, b| a.kind.cmp(&b.kind));

        debug!("Listed {} tenant types", types.len());
        Ok(types)
    }

    /// Full description of one type, looked up by its CRD name
    #[instrument(skip(self))]
    pub async fn get_type_detail(&self, name: &str) -> Result<TypeDetail> {
        if name.is_empty() {
            return Err(GatewayError::InvalidInput("type name is required".into()));
        }

        let crds: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let crd = crds
            .get(name)
            .await
            .map_err(|e| GatewayError::from_kube(e, format!("CustomResourceDefinition {}", name)))?;

        if crd.spec.group != self.tenant_group {
            warn!(
                "Attempted to access CRD {} outside the tenant group (group {})",
                name, crd.spec.group
            );
            return Err(GatewayError::Forbidden(format!(
                "CRD {} is not in the '{}' group",
                name, self.tenant_group
            )));
        }

        let detail = describe(&crd);
        debug!("Retrieved CRD {}", name);
        Ok(detail)
    }

    /// Compare `policy` against the scopes declared by the live catalog.
    /// Every disagreement is logged.
    #[instrument(skip(self, policy))]
    pub async fn check_scope_drift(&self, policy: &ScopePolicy) -> Result<Vec<ScopeDrift>> {
        let types = self.list_types().await?;
        let drift = policy.check_drift(&types);

        for d in &drift {
            warn!(
                "Scope table treats {} as {}, but the cluster declares it {}",
                d.kind,
                scope_name(d.configured_namespaced),
                scope_name(d.live_namespaced)
            );
        }
        if drift.is_empty() {
            info!("Scope table matches {} tenant types", types.len());
        }

        Ok(drift)
    }
}

fn scope_name(namespaced: bool) -> &'static str {
    if namespaced {
        "namespaced"
    } else {
        "cluster-scoped"
    }
}

/// Pick the version instances are persisted as.
///
/// Falls back to the first declared version when none is marked as
/// storage; that version's schema may not match what is stored.
pub fn storage_version(crd: &CustomResourceDefinition) -> Option<&CustomResourceDefinitionVersion> {
    let versions = &crd.spec.versions;
    versions.iter().find(|v| v.storage).or_else(|| {
        let first = versions.first();
        if let Some(v) = first {
            warn!(
                "CRD {} has no storage version, falling back to {}",
                crd.name_any(),
                v.name
            );
        }
        first
    })
}

fn summarize(crd: &CustomResourceDefinition) -> TypeSummary {
    let names = &crd.spec.names;
    TypeSummary {
        kind: names.kind.clone(),
        group: crd.spec.group.clone(),
        version: storage_version(crd)
            .map(|v| v.name.clone())
            .unwrap_or_default(),
        namespaced: crd.spec.scope == NAMESPACE_SCOPED,
        plural: names.plural.clone(),
        singular: names.singular.clone().unwrap_or_default(),
    }
}

fn describe(crd: &CustomResourceDefinition) -> TypeDetail {
    let schema = storage_version(crd)
        .and_then(|v| v.schema.as_ref())
        .and_then(|s| s.open_api_v3_schema.as_ref())
        .map(flatten);

    let description = crd
        .annotations()
        .get(annotations::DESCRIPTION)
        .filter(|d| !d.is_empty())
        .cloned();

    TypeDetail {
        name: crd.name_any(),
        summary: summarize(crd),
        short_names: crd.spec.names.short_names.clone().unwrap_or_default(),
        categories: crd.spec.names.categories.clone().unwrap_or_default(),
        schema,
        description,
    }
}
