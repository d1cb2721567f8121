// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request seen by [`MockService`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Option<Value>,
}

/// A mock HTTP service that returns predefined responses based on request paths.
///
/// Discovery documents registered with [`MockService::with_discovery`] only
/// answer their exact path. Requests without a predefined response are served from a small object
/// store: POST creates `{path}/{metadata.name}`, and GET, PATCH and DELETE
/// on that path read, replace and remove it.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    discovery: Arc<Mutex<HashMap<String, String>>>,
    objects: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            discovery: Arc::new(Mutex::new(HashMap::new())),
            objects: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Add a response for DELETE requests matching the exact path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Serve an API resource list for `group_version`.
    /// Each resource is `(kind, plural, namespaced)`.
    pub fn with_discovery(self, group_version: &str, resources: &[(&str, &str, bool)]) -> Self {
        let resources: Vec<Value> = resources
            .iter()
            .map(|(kind, plural, namespaced)| {
                serde_json::json!({
                    "name": plural,
                    "singularName": kind.to_lowercase(),
                    "namespaced": namespaced,
                    "kind": kind,
                    "verbs": ["create", "delete", "get", "list", "patch"]
                })
            })
            .collect();
        let list = serde_json::json!({
            "kind": "APIResourceList",
            "apiVersion": "v1",
            "groupVersion": group_version,
            "resources": resources
        });
        self.discovery
            .lock()
            .unwrap()
            .insert(format!("/apis/{}", group_version), list.to_string());
        self
    }

    /// Seed the object store with an existing object
    pub fn with_object(self, path: &str, object: Value) -> Self {
        self.objects.lock().unwrap().insert(path.to_string(), object);
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Methods of all requests received so far, in order
    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.method).collect()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        if method == "GET" {
            if let Some(list) = self.discovery.lock().unwrap().get(path) {
                return Some((200, list.clone()));
            }
        }

        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Try prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p.as_str()) {
                return Some(resp.clone());
            }
        }

        None
    }

    fn serve_object(&self, method: &str, path: &str, body: Option<Value>) -> (u16, String) {
        let mut objects = self.objects.lock().unwrap();

        match method {
            "POST" => {
                let Some(body) = body else {
                    return (400, status_json(400, "BadRequest", "missing body"));
                };
                let name = body["metadata"]["name"].as_str().unwrap_or_default();
                let item_path = format!("{}/{}", path, name);
                if objects.contains_key(&item_path) {
                    return (
                        409,
                        status_json(409, "AlreadyExists", &format!("\"{}\" already exists", name)),
                    );
                }
                objects.insert(item_path, body.clone());
                (201, body.to_string())
            }
            "GET" => match objects.get(path) {
                Some(obj) => (200, obj.to_string()),
                None => (404, status_json(404, "NotFound", "not found")),
            },
            "PATCH" => match body {
                Some(body) => {
                    objects.insert(path.to_string(), body.clone());
                    (200, body.to_string())
                }
                None => (400, status_json(400, "BadRequest", "missing body")),
            },
            "DELETE" => match objects.remove(path) {
                Some(obj) => (200, obj.to_string()),
                None => (404, status_json(404, "NotFound", "not found")),
            },
            _ => (405, status_json(405, "MethodNotAllowed", "method not allowed")),
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let this = self.clone();

        Box::pin(async move {
            let method = req.method().to_string();
            let path = req.uri().path().to_string();
            let query = req.uri().query().unwrap_or_default().to_string();

            let bytes = req.into_body().collect().await?.to_bytes();
            let body: Option<Value> = serde_json::from_slice(&bytes).ok();

            this.requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query,
                body: body.clone(),
            });

            let (status, body) = match this.find_response(&method, &path) {
                Some(resp) => resp,
                None => this.serve_object(&method, &path, body),
            };

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create an error response with the given status code
pub fn error_json(code: u16, reason: &str) -> String {
    status_json(code, reason, &format!("{} error", reason))
}

/// Create a generic object JSON value
pub fn object_json(api_version: &str, kind: &str, name: &str, namespace: Option<&str>) -> Value {
    let mut obj = serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    });
    if let Some(ns) = namespace {
        obj["metadata"]["namespace"] = Value::String(ns.to_string());
    }
    obj
}

/// Create a list response wrapping `items`
pub fn list_json(api_version: &str, kind: &str, items: Vec<Value>) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": format!("{}List", kind),
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}
