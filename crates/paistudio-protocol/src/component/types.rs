use paistudio_wire::{ValidateError, WireModel};
use serde::{Deserialize, Serialize};

use crate::types::JsonObject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    /// Opaque pipeline-graph document; the platform interprets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl WireModel for ComponentVersion {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmt_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<ComponentVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// "Community", "Official" or a workspace id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for Component {
    fn validate(&self) -> Result<(), ValidateError> {
        if let Some(version) = &self.latest_version {
            version.validate()?;
        }
        Ok(())
    }
}
