// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::env;
use std::path::Path;

use crate::constants::{
    CLUSTER_SCOPED_KINDS, DEFAULT_NAMESPACE, DEFAULT_VERSION, FIELD_MANAGER, SCOPE_POLICY_VERSION,
    TENANT_GROUP,
};

/// Gateway configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// The only API group resources may belong to
    pub tenant_group: String,
    /// Version used when only a kind is known
    pub default_version: String,
    /// Namespace given to namespaced resources without one
    pub default_namespace: String,
    /// Field manager identity for server-side apply
    pub field_manager: String,
    pub cluster_scoped_kinds: BTreeSet<String>,
    /// Refuse to start when the scope table disagrees with the live catalog
    pub strict_scope_policy: bool,
}

/// On-disk scope table, e.g.
///
/// ```yaml
/// version: 1
/// clusterScopedKinds:
///   - Organization
///   - DataPlane
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScopePolicyFile {
    version: u32,
    #[serde(default)]
    cluster_scoped_kinds: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tenant_group: TENANT_GROUP.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            field_manager: FIELD_MANAGER.to_string(),
            cluster_scoped_kinds: CLUSTER_SCOPED_KINDS.iter().map(|k| k.to_string()).collect(),
            strict_scope_policy: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// A setting that is present but empty is an error rather than a
    /// fallback to its default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let cluster_scoped_kinds = if let Some(path) = lookup("SCOPE_POLICY_FILE") {
            load_scope_policy_file(Path::new(&path))?
        } else if let Some(kinds) = lookup("CLUSTER_SCOPED_KINDS") {
            parse_kind_list(&kinds)
        } else {
            defaults.cluster_scoped_kinds
        };

        let strict_scope_policy = match lookup("STRICT_SCOPE_POLICY") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("STRICT_SCOPE_POLICY must be true or false, got '{}'", v))?,
            None => false,
        };

        Ok(Config {
            tenant_group: setting(&lookup, "TENANT_GROUP", defaults.tenant_group)?,
            default_version: setting(&lookup, "DEFAULT_RESOURCE_VERSION", defaults.default_version)?,
            default_namespace: setting(&lookup, "DEFAULT_NAMESPACE", defaults.default_namespace)?,
            field_manager: setting(&lookup, "FIELD_MANAGER", defaults.field_manager)?,
            cluster_scoped_kinds,
            strict_scope_policy,
        })
    }

    /// `group/version` used for coordinate-based operations
    pub fn default_api_version(&self) -> String {
        format!("{}/{}", self.tenant_group, self.default_version)
    }
}

fn setting(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: String) -> Result<String> {
    match lookup(key) {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => bail!("{} is set but empty", key),
        Some(v) => Ok(v),
    }
}

fn parse_kind_list(kinds: &str) -> BTreeSet<String> {
    kinds
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn load_scope_policy_file(path: &Path) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scope policy file {}", path.display()))?;
    parse_scope_policy(&content)
        .with_context(|| format!("Invalid scope policy file {}", path.display()))
}

fn parse_scope_policy(content: &str) -> Result<BTreeSet<String>> {
    let file: ScopePolicyFile = serde_yaml::from_str(content)?;
    if file.version != SCOPE_POLICY_VERSION {
        bail!(
            "unsupported scope policy version {}, expected {}",
            file.version,
            SCOPE_POLICY_VERSION
        );
    }
    Ok(file.cluster_scoped_kinds.into_iter().collect())
}
