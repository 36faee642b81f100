use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAlgorithmPath {
    pub algorithm_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAlgorithmRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl WireModel for UpdateAlgorithmRequestBody {}

#[derive(Debug, Clone)]
pub struct UpdateAlgorithmRequest {
    pub path: UpdateAlgorithmPath,
    pub body: UpdateAlgorithmRequestBody,
}
