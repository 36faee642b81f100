use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

use crate::types::JsonObject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateComponentRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Required; unique within the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial version document; defaults to "v1" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for CreateComponentRequestBody {}

#[derive(Debug, Clone, Default)]
pub struct CreateComponentRequest {
    pub body: CreateComponentRequestBody,
}
