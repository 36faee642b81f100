use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAlgorithmVersionsPath {
    pub algorithm_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListAlgorithmVersionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

impl WireModel for ListAlgorithmVersionsQuery {}

#[derive(Debug, Clone)]
pub struct ListAlgorithmVersionsRequest {
    pub path: ListAlgorithmVersionsPath,
    pub query: ListAlgorithmVersionsQuery,
}
