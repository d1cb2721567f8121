// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Untyped API handles for resolved type descriptors

use crate::error::{GatewayError, Result};
use crate::types::TypeDescriptor;
use kube::{
    core::{ApiResource, DynamicObject},
    discovery,
    error::DiscoveryError,
    Api, Client,
};
use tracing::debug;

/// Look up how the API server names `descriptor`'s resource.
///
/// When the group version is not served, or does not list the kind, the
/// plural is derived from the kind and the request that follows reports
/// what the server makes of it.
pub async fn discover_resource(client: &Client, descriptor: &TypeDescriptor) -> Result<ApiResource> {
    match discovery::pinned_kind(client, &descriptor.gvk()).await {
        Ok((ar, _)) => Ok(ar),
        Err(kube::Error::Api(resp)) if resp.code == 404 => {
            debug!("{} is not served, deriving plural from kind", descriptor.api_version());
            Ok(descriptor.api_resource())
        }
        Err(kube::Error::Discovery(DiscoveryError::MissingKind(_))) => {
            debug!("{} is not listed by discovery, deriving plural from kind", descriptor);
            Ok(descriptor.api_resource())
        }
        Err(e) => Err(GatewayError::from_kube(e, descriptor.to_string())),
    }
}

/// Build an API handle for `ar`.
///
/// With a namespace the handle is scoped to it; without one it addresses
/// cluster-scoped instances, or lists across all namespaces.
pub fn dynamic_api(client: &Client, ar: &ApiResource, namespace: Option<&str>) -> Api<DynamicObject> {
    match namespace {
        Some(ns) => Api::namespaced_with(client.clone(), ns, ar),
        None => Api::all_with(client.clone(), ar),
    }
}
