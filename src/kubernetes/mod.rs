// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and dynamic API access.

pub mod client;
pub mod dynamic;

pub use client::create_client;
pub use dynamic::{discover_resource, dynamic_api};
