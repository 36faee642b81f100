use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateResourceGroupRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required; unique per account and region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl WireModel for CreateResourceGroupRequestBody {}

#[derive(Debug, Clone, Default)]
pub struct CreateResourceGroupRequest {
    pub body: CreateResourceGroupRequestBody,
}
