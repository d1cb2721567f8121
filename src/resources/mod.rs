// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic resource access: upsert, get, delete and list.

pub mod projection;
pub mod service;
pub mod upsert;

pub use service::ResourceService;
pub use upsert::upsert;
