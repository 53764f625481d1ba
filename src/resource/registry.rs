//! Field schema registry
//!
//! The form description lives in `schema.json` next to this file and is
//! parsed once on first use.

use super::schema::{FieldGroup, OperationOption, ResourceDef, SchemaRegistry, VisibleGroup};
use anyhow::{Context, Result};
use std::sync::OnceLock;
use tracing::warn;

const SCHEMA_JSON: &str = include_str!("schema.json");

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Parse the embedded schema document
pub fn load_registry() -> Result<SchemaRegistry> {
    serde_json::from_str(SCHEMA_JSON).context("Failed to parse embedded field schema")
}

/// Get the process-wide registry
pub fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(|| {
        load_registry().unwrap_or_else(|e| {
            warn!("{:#}", e);
            SchemaRegistry::default()
        })
    })
}

/// Look up a resource selector entry
pub fn resource_def(resource: &str) -> Option<&'static ResourceDef> {
    registry().resources.iter().find(|r| r.value == resource)
}

/// Operation selector options for a resource
pub fn operations_for(resource: &str) -> &'static [OperationOption] {
    resource_def(resource)
        .map(|r| r.operations.as_slice())
        .unwrap_or(&[])
}

/// Operation preselected when a resource is chosen
pub fn default_operation(resource: &str) -> Option<&'static str> {
    resource_def(resource).map(|r| r.default_operation.as_str())
}

pub fn default_resource() -> &'static str {
    registry().default_resource.as_str()
}

/// Look up a field group by collection name
pub fn get_group(name: &str) -> Option<&'static FieldGroup> {
    registry().groups.iter().find(|g| g.name == name)
}

/// Field groups shown for a selection, in declaration order, each with its
/// hidden fields removed
pub fn visible_groups(resource: &str, operation: &str) -> Vec<VisibleGroup<'static>> {
    registry()
        .groups
        .iter()
        .filter(|g| g.is_visible(resource, operation))
        .map(|group| VisibleGroup {
            group,
            fields: group
                .fields
                .iter()
                .filter(|f| f.is_visible(resource, operation))
                .collect(),
        })
        .collect()
}
