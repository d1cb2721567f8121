// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data model shared by the resource and schema services.

pub mod catalog;
pub mod coordinates;
pub mod descriptor;
pub mod object;
pub mod results;

pub use catalog::{SchemaNode, ScopeDrift, TypeDetail, TypeSummary};
pub use coordinates::ResourceCoordinates;
pub use descriptor::TypeDescriptor;
pub use object::GenericObject;
pub use results::{
    ApplyOperation, ApplyResult, DeleteResourceResult, GetResourceResult, ListResourcesResult,
    ResourceSummary,
};
