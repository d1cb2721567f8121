// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of CRD OpenAPI schemas into plain schema trees.

use crate::types::SchemaNode;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use serde_json::{Map, Value};

/// Flatten a schema, keeping only the fields that are actually specified.
///
/// Empty strings and empty collections count as unspecified, and
/// `uniqueItems` is only kept when true. Recursion follows `properties`,
/// a single-schema `items` and a schema-valued `additionalProperties`.
pub fn flatten(schema: &JSONSchemaProps) -> SchemaNode {
    SchemaNode {
        type_: non_empty(&schema.type_),
        description: non_empty(&schema.description),
        format: non_empty(&schema.format),
        title: non_empty(&schema.title),
        default: schema.default.as_ref().map(|v| v.0.clone()),
        example: schema.example.as_ref().map(|v| v.0.clone()),
        enum_: schema
            .enum_
            .as_ref()
            .filter(|values| !values.is_empty())
            .map(|values| values.iter().map(|v| v.0.clone()).collect()),
        required: schema.required.clone().filter(|r| !r.is_empty()),
        properties: schema
            .properties
            .as_ref()
            .filter(|props| !props.is_empty())
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| (name.clone(), flatten(prop)))
                    .collect()
            }),
        items: match &schema.items {
            Some(JSONSchemaPropsOrArray::Schema(items)) => Some(Box::new(flatten(items))),
            _ => None,
        },
        additional_properties: match &schema.additional_properties {
            Some(JSONSchemaPropsOrBool::Schema(values)) => Some(Box::new(flatten(values))),
            _ => None,
        },
        min_length: schema.min_length,
        max_length: schema.max_length,
        pattern: non_empty(&schema.pattern),
        minimum: schema.minimum,
        maximum: schema.maximum,
        min_items: schema.min_items,
        max_items: schema.max_items,
        unique_items: schema.unique_items.filter(|unique| *unique),
    }
}

/// Flatten a schema straight into a generic JSON map
pub fn flatten_to_map(schema: &JSONSchemaProps) -> Map<String, Value> {
    match serde_json::to_value(flatten(schema)) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.clone().filter(|s| !s.is_empty())
}
