use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAlgorithmPath {
    pub algorithm_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteAlgorithmRequest {
    pub path: DeleteAlgorithmPath,
}
