use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAlgorithmVersionPath {
    pub algorithm_id: String,
    pub algorithm_version: String,
}

#[derive(Debug, Clone)]
pub struct DeleteAlgorithmVersionRequest {
    pub path: DeleteAlgorithmVersionPath,
}
