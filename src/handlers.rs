// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! JSON-in, JSON-out entry points for request handlers.

use crate::config::Config;
use crate::error::Result;
use crate::resources::ResourceService;
use crate::schema::SchemaService;
use crate::types::TypeSummary;
use kube::Client;
use serde::Serialize;

#[derive(Serialize)]
struct TypeListResponse<'a> {
    crds: &'a [TypeSummary],
}

/// Forwards handler arguments to the services and serializes the results
#[derive(Clone)]
pub struct ToolHandler {
    pub resources: ResourceService,
    pub schemas: SchemaService,
}

impl ToolHandler {
    pub fn new(client: Client, config: Config) -> Self {
        let schemas = SchemaService::new(client.clone(), config.tenant_group.clone());
        let resources = ResourceService::new(client, config);
        Self { resources, schemas }
    }

    pub async fn apply_resource(&self, json: &str) -> Result<String> {
        marshal(&self.resources.apply_json(json).await?)
    }

    pub async fn get_resource(&self, kind: &str, name: &str, namespace: &str) -> Result<String> {
        marshal(&self.resources.get(kind, name, namespace).await?)
    }

    pub async fn delete_resource(&self, kind: &str, name: &str, namespace: &str) -> Result<String> {
        marshal(&self.resources.delete(kind, name, namespace).await?)
    }

    pub async fn list_resources(&self, kind: &str, namespace: &str) -> Result<String> {
        marshal(&self.resources.list(kind, namespace).await?)
    }

    pub async fn list_types(&self) -> Result<String> {
        let types = self.schemas.list_types().await?;
        marshal(&TypeListResponse { crds: &types })
    }

    pub async fn get_type_detail(&self, name: &str) -> Result<String> {
        marshal(&self.schemas.get_type_detail(name).await?)
    }
}

fn marshal<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
