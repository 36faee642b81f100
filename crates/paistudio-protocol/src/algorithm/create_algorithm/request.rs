use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAlgorithmRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_description: Option<String>,
    /// Required; unique within the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl WireModel for CreateAlgorithmRequestBody {}

#[derive(Debug, Clone, Default)]
pub struct CreateAlgorithmRequest {
    pub body: CreateAlgorithmRequestBody,
}
