// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic apply/get/delete/list over tenant resources.

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::kubernetes::{discover_resource, dynamic_api};
use crate::resources::projection::{deletion_result, project_detail, project_list};
use crate::resources::upsert::upsert;
use crate::scope::ScopePolicy;
use crate::types::{
    ApplyResult, DeleteResourceResult, GenericObject, GetResourceResult, ListResourcesResult,
    ResourceCoordinates, TypeDescriptor,
};
use kube::{
    api::{DeleteParams, ListParams},
    core::DynamicObject,
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Stateless access to tenant resources of any kind.
///
/// Every call is a live round trip to the API server.
#[derive(Clone)]
pub struct ResourceService {
    client: Client,
    config: Config,
    policy: ScopePolicy,
}

impl ResourceService {
    pub fn new(client: Client, config: Config) -> Self {
        let policy = ScopePolicy::from_config(&config);
        Self {
            client,
            config,
            policy,
        }
    }

    pub fn scope_policy(&self) -> &ScopePolicy {
        &self.policy
    }

    /// Apply a resource from its JSON definition
    #[instrument(skip(self, json))]
    pub async fn apply_json(&self, json: &str) -> Result<ApplyResult> {
        debug!("Applying resource from JSON");
        let obj = GenericObject::from_json(json)?;
        self.apply(obj).await
    }

    /// Create or update a resource
    pub async fn apply(&self, mut obj: GenericObject) -> Result<ApplyResult> {
        let descriptor =
            TypeDescriptor::resolve(obj.api_version(), obj.kind(), &self.config.tenant_group)?;

        self.policy.apply_scope(&mut obj, &descriptor);

        let name = obj.name();
        let namespace = obj.namespace().map(str::to_string);
        let api = self.api(&descriptor, namespace.as_deref()).await?;

        let operation = upsert(&api, obj, &self.config.field_manager).await?;

        info!(
            "Resource applied successfully: {} {}/{} ({})",
            descriptor.kind,
            namespace.as_deref().unwrap_or_default(),
            name,
            operation
        );

        Ok(ApplyResult {
            api_version: descriptor.api_version(),
            kind: descriptor.kind,
            name,
            namespace: namespace.unwrap_or_default(),
            operation,
        })
    }

    /// Get a resource by kind, name and namespace
    #[instrument(skip(self))]
    pub async fn get(&self, kind: &str, name: &str, namespace: &str) -> Result<GetResourceResult> {
        let requested = ResourceCoordinates::named(kind, name, namespace)?;
        let coordinates = requested.in_namespace(self.policy.namespace_for(&requested));
        let api = self
            .api(&self.descriptor_for(kind), coordinates.namespace.as_deref())
            .await?;

        let obj = api
            .get(name)
            .await
            .map_err(|e| GatewayError::from_kube(e, coordinates.to_string()))?;

        info!("Resource retrieved successfully: {}", coordinates);
        Ok(project_detail(&obj))
    }

    /// Delete a resource by kind, name and namespace.
    /// The deletion is not waited for.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        kind: &str,
        name: &str,
        namespace: &str,
    ) -> Result<DeleteResourceResult> {
        let requested = ResourceCoordinates::named(kind, name, namespace)?;
        let coordinates = requested.in_namespace(self.policy.namespace_for(&requested));
        let api = self
            .api(&self.descriptor_for(kind), coordinates.namespace.as_deref())
            .await?;

        api.delete(name, &DeleteParams::default())
            .await
            .map_err(|e| GatewayError::from_kube(e, coordinates.to_string()))?;

        info!("Resource deleted successfully: {}", coordinates);
        Ok(deletion_result(
            self.config.default_api_version(),
            kind,
            name,
            coordinates.namespace.as_deref(),
        ))
    }

    /// List resources of a kind, in one namespace or across all of them
    #[instrument(skip(self))]
    pub async fn list(&self, kind: &str, namespace: &str) -> Result<ListResourcesResult> {
        let requested = ResourceCoordinates::collection(kind, namespace)?;
        let coordinates = requested.in_namespace(self.policy.list_namespace_for(&requested));
        let api = self
            .api(&self.descriptor_for(kind), coordinates.namespace.as_deref())
            .await?;

        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| GatewayError::from_kube(e, coordinates.to_string()))?;

        let result = project_list(self.config.default_api_version(), kind, &list.items);
        info!(
            "Resources listed successfully: {} (count={})",
            coordinates, result.total_count
        );
        Ok(result)
    }

    async fn api(
        &self,
        descriptor: &TypeDescriptor,
        namespace: Option<&str>,
    ) -> Result<Api<DynamicObject>> {
        let ar = discover_resource(&self.client, descriptor).await?;
        Ok(dynamic_api(&self.client, &ar, namespace))
    }

    fn descriptor_for(&self, kind: &str) -> TypeDescriptor {
        TypeDescriptor::new(&self.config.tenant_group, &self.config.default_version, kind)
    }
}
