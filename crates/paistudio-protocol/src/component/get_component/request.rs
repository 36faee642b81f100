use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetComponentPath {
    pub component_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct GetComponentQuery {
    /// Defaults to the latest version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl WireModel for GetComponentQuery {}

#[derive(Debug, Clone)]
pub struct GetComponentRequest {
    pub path: GetComponentPath,
    pub query: GetComponentQuery,
}
