// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Schema catalog introspection.

pub mod catalog;
pub mod flatten;

pub use catalog::{storage_version, SchemaService};
pub use flatten::{flatten, flatten_to_map};
