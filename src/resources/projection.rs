// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Shape raw store objects into compact response views.

use crate::types::{
    DeleteResourceResult, GetResourceResult, ListResourcesResult, ResourceSummary,
};
use kube::{core::DynamicObject, ResourceExt};
use serde_json::Value;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Summarize one instance for a list response
pub fn summarize(obj: &DynamicObject) -> ResourceSummary {
    ResourceSummary {
        name: obj.name_any(),
        namespace: obj.namespace().filter(|ns| !ns.is_empty()),
        created_at: obj
            .metadata
            .creation_timestamp
            .as_ref()
            .map(|t| t.0.format(TIMESTAMP_FORMAT).to_string()),
        labels: obj.labels().clone(),
        status: sub_document(obj, "status"),
    }
}

pub fn project_list(api_version: String, kind: &str, objects: &[DynamicObject]) -> ListResourcesResult {
    let items: Vec<ResourceSummary> = objects.iter().map(summarize).collect();

    ListResourcesResult {
        api_version,
        kind: kind.to_string(),
        total_count: items.len(),
        items,
    }
}

pub fn project_detail(obj: &DynamicObject) -> GetResourceResult {
    let (api_version, kind) = obj
        .types
        .as_ref()
        .map(|t| (t.api_version.clone(), t.kind.clone()))
        .unwrap_or_default();

    GetResourceResult {
        api_version,
        kind,
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        spec: sub_document(obj, "spec"),
        status: sub_document(obj, "status"),
    }
}

pub fn deletion_result(
    api_version: String,
    kind: &str,
    name: &str,
    namespace: Option<&str>,
) -> DeleteResourceResult {
    DeleteResourceResult {
        api_version,
        kind: kind.to_string(),
        name: name.to_string(),
        namespace: namespace.unwrap_or_default().to_string(),
        message: format!("Resource {}/{} deleted successfully", kind, name),
    }
}

/// A top-level sub-document, only when it is an object
fn sub_document(obj: &DynamicObject, key: &str) -> Option<Value> {
    obj.data.get(key).filter(|v| v.is_object()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_object(value: Value) -> DynamicObject {
        serde_json::from_value(value).unwrap()
    }

    fn widget(name: &str) -> DynamicObject {
        make_object(json!({
            "apiVersion": "tenant.dev/v1alpha1",
            "kind": "Widget",
            "metadata": {
                "name": name,
                "namespace": "default",
                "creationTimestamp": "2024-05-01T12:30:00Z",
                "labels": {"app": "demo"}
            },
            "spec": {"size": 3},
            "status": {"phase": "Ready"}
        }))
    }

    #[test]
    fn test_summarize_full() {
        let summary = summarize(&widget("w1"));

        assert_eq!(summary.name, "w1");
        assert_eq!(summary.namespace.as_deref(), Some("default"));
        assert_eq!(summary.created_at.as_deref(), Some("2024-05-01T12:30:00Z"));
        assert_eq!(summary.labels.get("app").map(String::as_str), Some("demo"));
        assert_eq!(summary.status, Some(json!({"phase": "Ready"})));
    }

    #[test]
    fn test_summarize_minimal_omits_absent_fields() {
        let obj = make_object(json!({
            "apiVersion": "tenant.dev/v1alpha1",
            "kind": "Organization",
            "metadata": {"name": "acme"}
        }));

        let value = serde_json::to_value(summarize(&obj)).unwrap();
        assert_eq!(value, json!({"name": "acme"}));
    }

    #[test]
    fn test_project_list_total_count() {
        for n in [0usize, 1, 5] {
            let objects: Vec<_> = (0..n).map(|i| widget(&format!("w{}", i))).collect();
            let result = project_list("tenant.dev/v1alpha1".into(), "Widget", &objects);
            assert_eq!(result.items.len(), n);
            assert_eq!(result.total_count, n);
        }
    }

    #[test]
    fn test_project_detail() {
        let detail = project_detail(&widget("w1"));

        assert_eq!(detail.api_version, "tenant.dev/v1alpha1");
        assert_eq!(detail.kind, "Widget");
        assert_eq!(detail.namespace, "default");
        assert_eq!(detail.spec, Some(json!({"size": 3})));
        assert_eq!(detail.status, Some(json!({"phase": "Ready"})));
    }

    #[test]
    fn test_project_detail_omits_missing_spec_and_status() {
        let obj = make_object(json!({
            "apiVersion": "tenant.dev/v1alpha1",
            "kind": "Organization",
            "metadata": {"name": "acme"}
        }));

        let value = serde_json::to_value(project_detail(&obj)).unwrap();
        assert_eq!(
            value,
            json!({"apiVersion": "tenant.dev/v1alpha1", "kind": "Organization", "name": "acme"})
        );
    }

    #[test]
    fn test_deletion_result_message() {
        let result = deletion_result("tenant.dev/v1alpha1".into(), "Widget", "w1", Some("default"));
        assert_eq!(result.message, "Resource Widget/w1 deleted successfully");
        assert_eq!(result.namespace, "default");
    }
}
