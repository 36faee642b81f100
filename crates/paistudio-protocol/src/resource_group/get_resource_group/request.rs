use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResourceGroupPath {
    pub resource_group_id: String,
}

#[derive(Debug, Clone)]
pub struct GetResourceGroupRequest {
    pub path: GetResourceGroupPath,
}
