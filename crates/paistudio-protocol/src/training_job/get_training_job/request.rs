use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTrainingJobPath {
    pub training_job_id: String,
}

#[derive(Debug, Clone)]
pub struct GetTrainingJobRequest {
    pub path: GetTrainingJobPath,
}
