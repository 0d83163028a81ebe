//! Metadata snapshots of registered variables.

use serde::Serialize;

use crate::variable::AnyVariable;

/// Point-in-time description of one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableInfo {
    pub readonly: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub value: String,
    pub default_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VariableInfo {
    pub(crate) fn snapshot(var: &dyn AnyVariable) -> Self {
        Self {
            readonly: var.is_readonly(),
            name: var.name().to_string(),
            type_label: var.type_label().to_string(),
            value: var.value_as_string(),
            default_value: var.default_value_as_string(),
            description: var.description().map(str::to_string),
        }
    }
}
