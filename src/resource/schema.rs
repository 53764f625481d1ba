//! Field schema definitions
//!
//! These types describe the node's form in a data-driven way: which
//! resources exist, which operations each resource offers, and which field
//! groups are shown for a given resource/operation selection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input field types understood by the host form layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    #[default]
    String,
    /// Numeric input
    Number,
    /// Toggle
    Boolean,
    /// Enumerated choice (see `FieldSpec::options`)
    Options,
}

/// Visibility predicate: a conjunction over the selected resource and operation.
///
/// An empty list means "any value" for that selector.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub resource: Vec<String>,
    #[serde(default)]
    pub operation: Vec<String>,
}

impl DisplayOptions {
    pub fn matches(&self, resource: &str, operation: &str) -> bool {
        let resource_ok = self.resource.is_empty() || self.resource.iter().any(|r| r == resource);
        let operation_ok =
            self.operation.is_empty() || self.operation.iter().any(|o| o == operation);
        resource_ok && operation_ok
    }
}

/// One choice of an `options` field
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldOption {
    pub name: String,
    pub value: String,
}

/// A single input field inside a group
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldSpec {
    /// Parameter name as read from the collection (e.g., "profileUrl")
    pub name: String,

    pub display_name: String,

    #[serde(default)]
    pub kind: FieldKind,

    /// Default shown by the form; `null` when the field starts empty
    #[serde(default)]
    pub default: Value,

    /// Advisory only; enforced by the host form, never by the body builder
    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub options: Vec<FieldOption>,

    #[serde(default)]
    pub min_value: Option<f64>,

    /// Nested predicate inside an already visible group
    #[serde(default)]
    pub show: Option<DisplayOptions>,
}

impl FieldSpec {
    pub fn is_visible(&self, resource: &str, operation: &str) -> bool {
        self.show
            .as_ref()
            .map(|s| s.matches(resource, operation))
            .unwrap_or(true)
    }
}

/// A named collection of fields shown together
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldGroup {
    /// Collection name the execution loop reads (e.g., "postsParams")
    pub name: String,

    pub display_name: String,

    /// Groups without a predicate are always shown
    #[serde(default)]
    pub show: Option<DisplayOptions>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FieldGroup {
    pub fn is_visible(&self, resource: &str, operation: &str) -> bool {
        self.show
            .as_ref()
            .map(|s| s.matches(resource, operation))
            .unwrap_or(true)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Operation selector entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OperationOption {
    pub value: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Resource selector entry with its operations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceDef {
    pub value: String,
    pub name: String,
    pub default_operation: String,
    #[serde(default)]
    pub operations: Vec<OperationOption>,
}

/// The whole form description
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaRegistry {
    #[serde(default)]
    pub default_resource: String,
    #[serde(default)]
    pub resources: Vec<ResourceDef>,
    #[serde(default)]
    pub groups: Vec<FieldGroup>,
}

/// A group as it appears for one selection, with hidden fields filtered out
#[derive(Debug, Clone)]
pub struct VisibleGroup<'a> {
    pub group: &'a FieldGroup,
    pub fields: Vec<&'a FieldSpec>,
}

impl<'a> VisibleGroup<'a> {
    pub fn field_names(&self) -> Vec<&'a str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
