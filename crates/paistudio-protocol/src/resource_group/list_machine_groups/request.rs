use paistudio_wire::WireModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMachineGroupsPath {
    pub resource_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ListMachineGroupsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl WireModel for ListMachineGroupsQuery {}

#[derive(Debug, Clone)]
pub struct ListMachineGroupsRequest {
    pub path: ListMachineGroupsPath,
    pub query: ListMachineGroupsQuery,
}
