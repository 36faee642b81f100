use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAlgorithmPath {
    pub algorithm_id: String,
}

#[derive(Debug, Clone)]
pub struct GetAlgorithmRequest {
    pub path: GetAlgorithmPath,
}
