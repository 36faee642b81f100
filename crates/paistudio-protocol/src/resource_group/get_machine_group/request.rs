use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMachineGroupPath {
    pub resource_group_id: String,
    pub machine_group_id: String,
}

#[derive(Debug, Clone)]
pub struct GetMachineGroupRequest {
    pub path: GetMachineGroupPath,
}
