// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-if-absent, patch-if-present.

use crate::error::{GatewayError, Result};
use crate::types::{ApplyOperation, GenericObject};
use kube::{
    api::{Patch, PatchParams, PostParams},
    core::DynamicObject,
    Api,
};
use tracing::{debug, info, instrument};

/// Write `obj` through `api`, creating it when it does not exist yet and
/// server-side applying it with forced ownership otherwise.
///
/// Concurrent upserts of the same object are not serialized here; the API
/// server's apply merge makes them converge.
#[instrument(skip(api, obj), fields(kind = %obj.kind(), name = %obj.name(), namespace = ?obj.namespace()))]
pub async fn upsert(
    api: &Api<DynamicObject>,
    obj: GenericObject,
    field_manager: &str,
) -> Result<ApplyOperation> {
    let name = obj.name();
    let target = format!(
        "{} {}",
        obj.kind(),
        match obj.namespace() {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.clone(),
        }
    );

    match api.get(&name).await {
        Ok(_) => {
            debug!("{} exists, applying changes", target);
            let pp = PatchParams::apply(field_manager).force();
            api.patch(&name, &pp, &Patch::Apply(obj.as_dynamic()))
                .await
                .map_err(|e| GatewayError::from_kube(e, target.as_str()))?;
            info!("Updated {}", target);
            Ok(ApplyOperation::Updated)
        }
        Err(e) => match GatewayError::from_kube(e, target.as_str()) {
            GatewayError::NotFound { .. } => {
                debug!("{} does not exist, creating it", target);
                api.create(&PostParams::default(), obj.as_dynamic())
                    .await
                    .map_err(|e| GatewayError::from_kube(e, target.as_str()))?;
                info!("Created {}", target);
                Ok(ApplyOperation::Created)
            }
            other => Err(other),
        },
    }
}
