use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateComponentPath {
    pub component_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateComponentRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl WireModel for UpdateComponentRequestBody {}

#[derive(Debug, Clone)]
pub struct UpdateComponentRequest {
    pub path: UpdateComponentPath,
    pub body: UpdateComponentRequestBody,
}
