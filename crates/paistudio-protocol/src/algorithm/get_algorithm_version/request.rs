use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAlgorithmVersionPath {
    pub algorithm_id: String,
    pub algorithm_version: String,
}

#[derive(Debug, Clone)]
pub struct GetAlgorithmVersionRequest {
    pub path: GetAlgorithmVersionPath,
}
