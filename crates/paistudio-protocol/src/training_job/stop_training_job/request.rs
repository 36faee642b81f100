use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTrainingJobPath {
    pub training_job_id: String,
}

#[derive(Debug, Clone)]
pub struct StopTrainingJobRequest {
    pub path: StopTrainingJobPath,
}
