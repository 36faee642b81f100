use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteComponentPath {
    pub component_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteComponentRequest {
    pub path: DeleteComponentPath,
}
