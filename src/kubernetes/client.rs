// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the backing cluster

use anyhow::{Context, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a Kubernetes client from the in-cluster environment or KUBECONFIG.
///
/// Timeouts and retries are left to the client's own configuration.
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;

    debug!("Using cluster URL {}", config.cluster_url);

    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");
    Ok(client)
}
