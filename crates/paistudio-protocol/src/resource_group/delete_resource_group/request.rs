use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResourceGroupPath {
    pub resource_group_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteResourceGroupRequest {
    pub path: DeleteResourceGroupPath,
}
